use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::config::ScannerConfig;
use crate::error::{Result, SiteAuditError};

/// Decides which directories are walked and which files become documents.
///
/// Paths handed to the filter are relative to the site root.
pub trait DocumentFilter {
    /// Whether a directory's subtree is traversed at all.
    fn should_descend(&self, rel_dir: &Path) -> bool;

    /// Whether a file is a document to audit.
    fn should_include(&self, rel_file: &Path) -> bool;
}

pub struct SiteFilter {
    extension: String,
    skip_dirs: Vec<String>,
    exclude_patterns: GlobSet,
}

impl SiteFilter {
    /// Create a filter for one document extension.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(
        extension: impl Into<String>,
        skip_dirs: Vec<String>,
        exclude_patterns: &[String],
    ) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| SiteAuditError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude_patterns = builder
            .build()
            .map_err(|e| SiteAuditError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self {
            extension: extension.into(),
            skip_dirs,
            exclude_patterns,
        })
    }

    /// Build from the `[scanner]` config section.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn from_config(config: &ScannerConfig) -> Result<Self> {
        Self::new(
            config.extension.clone(),
            config.skip_dirs.clone(),
            &config.exclude,
        )
    }

    fn is_pruned_name(&self, name: &str) -> bool {
        name.starts_with('.') || self.skip_dirs.iter().any(|d| d == name)
    }

    fn has_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == self.extension)
    }
}

impl DocumentFilter for SiteFilter {
    fn should_descend(&self, rel_dir: &Path) -> bool {
        let pruned = rel_dir
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| self.is_pruned_name(name));
        !pruned && !self.exclude_patterns.is_match(rel_dir)
    }

    fn should_include(&self, rel_file: &Path) -> bool {
        self.has_extension(rel_file) && !self.exclude_patterns.is_match(rel_file)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
