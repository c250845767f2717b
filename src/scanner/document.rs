use std::cell::OnceCell;
use std::path::{Path, PathBuf};

use crate::error::{Result, SiteAuditError};
use crate::filesystem::FileSystem;
use crate::path_utils::relative_slash;

/// A discovered markup document.
///
/// Content is read on first access and kept for the rest of the run.
#[derive(Debug)]
pub struct Document {
    rel_path: String,
    abs_path: PathBuf,
    content: OnceCell<String>,
}

impl Document {
    #[must_use]
    pub fn new(root: &Path, abs_path: PathBuf) -> Self {
        Self {
            rel_path: relative_slash(root, &abs_path),
            abs_path,
            content: OnceCell::new(),
        }
    }

    /// Path relative to the site root, `/`-separated.
    #[must_use]
    pub fn rel_path(&self) -> &str {
        &self.rel_path
    }

    /// Raw document text, loading it on first call.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD, so a page in
    /// a legacy encoding is still audited.
    ///
    /// # Errors
    /// Returns `FileRead` if the document cannot be read; the audit treats
    /// this as fatal.
    pub fn content<F: FileSystem>(&self, fs: &F) -> Result<&str> {
        if let Some(content) = self.content.get() {
            return Ok(content);
        }

        let bytes = fs
            .read(&self.abs_path)
            .map_err(|source| SiteAuditError::FileRead {
                path: self.abs_path.clone(),
                source,
            })?;
        let text = String::from_utf8_lossy(&bytes).into_owned();
        Ok(self.content.get_or_init(|| text))
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
