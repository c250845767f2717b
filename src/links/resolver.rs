use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::filesystem::{FileSystem, RealFileSystem};
use crate::path_utils::{normalize_lexically, to_slash};

use super::{LinkReference, LinkTable};

/// A link whose target exists neither as a file nor as a directory index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingLinkFinding {
    /// The link exactly as written.
    pub link: String,
    /// Source document path or the navigation label.
    pub source: String,
    /// Absolute candidate path, `/`-separated.
    pub resolved: String,
}

/// Maps link references onto filesystem candidates under the site root.
pub struct PathResolver<F: FileSystem = RealFileSystem> {
    root: PathBuf,
    index_file: String,
    fs: F,
}

impl<F: FileSystem> PathResolver<F> {
    /// `root` should be absolute; `index_file` is the directory index
    /// document name, e.g. `index.html`.
    #[must_use]
    pub fn with_fs(root: impl Into<PathBuf>, index_file: impl Into<String>, fs: F) -> Self {
        Self {
            root: root.into(),
            index_file: index_file.into(),
            fs,
        }
    }

    /// Candidate path for a reference. Anchors are ignored; leading `/`s
    /// root the reference at the site root, anything else is relative to
    /// the source's directory.
    ///
    /// All leading slashes are dropped before joining: joining an absolute
    /// path would replace the root, so `//etc/x` must stay `<root>/etc/x`.
    #[must_use]
    pub fn resolve(&self, reference: &LinkReference) -> PathBuf {
        let target = strip_anchor(&reference.link);
        let joined = if target.starts_with('/') {
            self.root.join(target.trim_start_matches('/'))
        } else {
            self.root.join(reference.source.base_dir()).join(target)
        };
        normalize_lexically(&joined)
    }

    /// A resolved path is satisfied by a file, or by an index document
    /// inside it.
    #[must_use]
    pub fn target_exists(&self, resolved: &Path) -> bool {
        self.fs.is_file(resolved) || self.fs.is_file(&resolved.join(&self.index_file))
    }

    #[must_use]
    pub fn check(&self, reference: &LinkReference) -> Option<MissingLinkFinding> {
        let resolved = self.resolve(reference);
        if self.target_exists(&resolved) {
            return None;
        }
        Some(MissingLinkFinding {
            link: reference.link.clone(),
            source: reference.source.to_string(),
            resolved: to_slash(&resolved),
        })
    }

    /// Check every unique reference once, in table order.
    #[must_use]
    pub fn check_all(&self, table: &LinkTable) -> Vec<MissingLinkFinding> {
        table.iter().filter_map(|r| self.check(r)).collect()
    }
}

fn strip_anchor(link: &str) -> &str {
    link.split_once('#').map_or(link, |(before, _)| before)
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
