//! The audit run: discovery, per-document link extraction and head checks,
//! navigation links, then resolution of every unique reference.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::checker::{Checker, HeadChecker, HeadViolation};
use crate::config::Config;
use crate::error::{Result, SiteAuditError};
use crate::filesystem::{FileSystem, RealFileSystem};
use crate::links::{LinkExtractor, LinkTable, MissingLinkFinding, NavExtractor, PathResolver};
use crate::output::AuditProgress;
use crate::scanner::{Document, DocumentScanner, FileScanner, SiteFilter};
use crate::{EXIT_FINDINGS, EXIT_SUCCESS};

/// Everything one run found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    pub documents: usize,
    /// Unique (source, link) pairs checked, navigation links included.
    pub links: usize,
    pub nav_links: usize,
    /// `false` when head checks were switched off.
    pub head_checked: bool,
    pub missing_links: Vec<MissingLinkFinding>,
    pub head_violations: Vec<HeadViolation>,
}

impl AuditReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.missing_links.is_empty() && self.head_violations.is_empty()
    }

    #[must_use]
    pub fn exit_code(&self) -> i32 {
        if self.is_clean() {
            EXIT_SUCCESS
        } else {
            EXIT_FINDINGS
        }
    }
}

pub struct Auditor<'a, F: FileSystem = RealFileSystem> {
    config: &'a Config,
    fs: F,
    check_nav: bool,
}

impl<'a> Auditor<'a, RealFileSystem> {
    #[must_use]
    pub const fn new(config: &'a Config) -> Self {
        Self::with_fs(config, RealFileSystem)
    }
}

impl<'a, F: FileSystem> Auditor<'a, F> {
    #[must_use]
    pub const fn with_fs(config: &'a Config, fs: F) -> Self {
        Self {
            config,
            fs,
            check_nav: true,
        }
    }

    /// Toggle extraction of navigation-definition links.
    #[must_use]
    pub const fn with_nav(mut self, check_nav: bool) -> Self {
        self.check_nav = check_nav;
        self
    }

    fn index_file(&self) -> String {
        format!(
            "{}.{}",
            self.config.links.index_stem, self.config.scanner.extension
        )
    }

    fn canonical_root(&self, root: &Path) -> Result<PathBuf> {
        self.fs
            .canonicalize(root)
            .map_err(|source| SiteAuditError::RootAccess {
                path: root.to_path_buf(),
                source,
            })
    }

    /// Run the whole audit. Findings never abort the run; filesystem
    /// failures do.
    ///
    /// # Errors
    /// Returns an error if the root is missing or unreadable, the tree cannot
    /// be walked, a document or an existing navigation source cannot be read,
    /// or the configuration cannot be compiled into rules.
    pub fn run(&self, root: &Path, progress: &AuditProgress) -> Result<AuditReport> {
        let root = self.canonical_root(root)?;
        let extension = &self.config.scanner.extension;

        progress.stage(&format!("🔍 Scanning .{extension} files..."));
        let filter = SiteFilter::from_config(&self.config.scanner)?;
        let scanner = DocumentScanner::with_fs(filter, &self.fs);
        let documents = scanner.scan(&root)?;
        progress.stage(&format!("Found {} .{extension} files", documents.len()));

        let head_checker = if self.config.head.enabled {
            Some(HeadChecker::new(
                &self.config.head,
                extension,
                &self.config.links.index_stem,
            )?)
        } else {
            None
        };

        progress.stage("📝 Extracting internal links...");
        let mut table = LinkTable::new();
        let head_violations =
            self.process_documents(&documents, head_checker.as_ref(), &mut table, progress)?;

        let nav_links = if self.check_nav {
            self.collect_nav_links(&root, &mut table, progress)?
        } else {
            0
        };
        progress.stage(&format!("Found {} internal links", table.len()));

        progress.stage("✅ Checking links...");
        let resolver = PathResolver::with_fs(root.clone(), self.index_file(), &self.fs);
        let missing_links = resolver.check_all(&table);

        Ok(AuditReport {
            documents: documents.len(),
            links: table.len(),
            nav_links,
            head_checked: head_checker.is_some(),
            missing_links,
            head_violations,
        })
    }

    fn process_documents(
        &self,
        documents: &[Document],
        head_checker: Option<&HeadChecker>,
        table: &mut LinkTable,
        progress: &AuditProgress,
    ) -> Result<Vec<HeadViolation>> {
        let extractor = LinkExtractor::new();
        let mut violations = Vec::new();

        progress.start(documents.len() as u64);
        for doc in documents {
            let content = doc.content(&self.fs)?;
            table.extend(extractor.extract(doc.rel_path(), content));
            if let Some(violation) = head_checker.and_then(|c| c.check(doc.rel_path(), content)) {
                violations.push(violation);
            }
            progress.inc();
        }
        progress.finish();

        Ok(violations)
    }

    /// Returns how many new references the navigation source contributed.
    fn collect_nav_links(
        &self,
        root: &Path,
        table: &mut LinkTable,
        progress: &AuditProgress,
    ) -> Result<usize> {
        let links = &self.config.links;
        let nav_path = root.join(&links.nav_source);
        if !self.fs.is_file(&nav_path) {
            progress.warn(
                &format!("Navigation source not found: {}", links.nav_source),
                Some("Only links found in markup are checked"),
            );
            return Ok(0);
        }

        let bytes = self
            .fs
            .read(&nav_path)
            .map_err(|source| SiteAuditError::FileRead {
                path: nav_path.clone(),
                source,
            })?;
        let content = String::from_utf8_lossy(&bytes);
        let before = table.len();
        table.extend(NavExtractor::new(links.nav_label.clone()).extract(&content));
        Ok(table.len() - before)
    }
}

#[cfg(test)]
#[path = "audit_tests.rs"]
mod tests;
