mod document;
mod filter;

pub use document::Document;
pub use filter::{DocumentFilter, SiteFilter};

use std::io::ErrorKind;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::{Result, SiteAuditError};
use crate::filesystem::{FileSystem, RealFileSystem};

/// Trait for discovering documents under a site root.
pub trait FileScanner {
    /// Scan a directory tree and return every matching document.
    ///
    /// # Errors
    /// Returns an error if the root is missing or not a directory, or if any
    /// part of the tree cannot be read. No partial result is returned.
    fn scan(&self, root: &Path) -> Result<Vec<Document>>;
}

/// Walks the site tree with walkdir.
///
/// The root check goes through the `FileSystem` seam; the traversal itself
/// always reads the real disk, so unit tests of the walk use a temp dir.
pub struct DocumentScanner<D: DocumentFilter, F: FileSystem = RealFileSystem> {
    filter: D,
    fs: F,
}

impl<D: DocumentFilter> DocumentScanner<D, RealFileSystem> {
    #[must_use]
    pub const fn new(filter: D) -> Self {
        Self::with_fs(filter, RealFileSystem)
    }
}

impl<D: DocumentFilter, F: FileSystem> DocumentScanner<D, F> {
    #[must_use]
    pub const fn with_fs(filter: D, fs: F) -> Self {
        Self { filter, fs }
    }

    fn check_root(&self, root: &Path) -> Result<()> {
        if self.fs.is_dir(root) {
            return Ok(());
        }
        let kind = if self.fs.exists(root) {
            ErrorKind::NotADirectory
        } else {
            ErrorKind::NotFound
        };
        Err(SiteAuditError::RootAccess {
            path: root.to_path_buf(),
            source: std::io::Error::from(kind),
        })
    }
}

impl<D: DocumentFilter, F: FileSystem> FileScanner for DocumentScanner<D, F> {
    fn scan(&self, root: &Path) -> Result<Vec<Document>> {
        self.check_root(root)?;

        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                // The root itself may be `.`; only prune below it.
                entry.depth() == 0
                    || !entry.file_type().is_dir()
                    || entry
                        .path()
                        .strip_prefix(root)
                        .is_ok_and(|rel| self.filter.should_descend(rel))
            });

        let mut documents = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|source| SiteAuditError::Walk {
                path: source.path().unwrap_or(root).to_path_buf(),
                source,
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let included = entry
                .path()
                .strip_prefix(root)
                .is_ok_and(|rel| self.filter.should_include(rel));
            if included {
                documents.push(Document::new(root, entry.into_path()));
            }
        }

        Ok(documents)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
