use regex::Regex;
use serde::Serialize;

use crate::config::HeadConfig;
use crate::error::{Result, SiteAuditError};

/// Head-tag category of a document, decided by its relative path alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    /// Known page that must not be indexed (error page, redirect landing).
    Noindex,
    /// Section index listing items in one language.
    List,
    /// Everything else.
    Ordinary,
}

/// Classifies relative document paths into exactly one `PageKind`.
#[derive(Debug)]
pub struct PageClassifier {
    noindex_pages: Vec<String>,
    list_pattern: Option<Regex>,
}

impl PageClassifier {
    /// Build the classifier. List pages match
    /// `(<prefix>/)?<section>/<index_stem>.<extension>`.
    ///
    /// # Errors
    /// Returns an error if the generated list-page pattern fails to compile.
    pub fn new(head: &HeadConfig, extension: &str, index_stem: &str) -> Result<Self> {
        Ok(Self {
            noindex_pages: head.noindex_pages.clone(),
            list_pattern: build_list_pattern(head, extension, index_stem)?,
        })
    }

    /// Noindex is tested first, then list pages; the rest are ordinary.
    #[must_use]
    pub fn classify(&self, rel_path: &str) -> PageKind {
        if self.noindex_pages.iter().any(|p| p == rel_path) {
            PageKind::Noindex
        } else if self
            .list_pattern
            .as_ref()
            .is_some_and(|re| re.is_match(rel_path))
        {
            PageKind::List
        } else {
            PageKind::Ordinary
        }
    }
}

fn alternation(values: &[String]) -> String {
    values
        .iter()
        .map(|v| regex::escape(v))
        .collect::<Vec<_>>()
        .join("|")
}

fn build_list_pattern(head: &HeadConfig, extension: &str, index_stem: &str) -> Result<Option<Regex>> {
    if head.sections.is_empty() {
        return Ok(None);
    }

    let prefix = if head.language_prefixes.is_empty() {
        String::new()
    } else {
        format!("(?:(?:{})/)?", alternation(&head.language_prefixes))
    };
    let pattern = format!(
        "^{prefix}(?:{})/{}\\.{}$",
        alternation(&head.sections),
        regex::escape(index_stem),
        regex::escape(extension)
    );

    Regex::new(&pattern)
        .map(Some)
        .map_err(|source| SiteAuditError::InvalidRegex { pattern, source })
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
