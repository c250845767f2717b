mod classify;

pub use classify::{PageClassifier, PageKind};

use serde::Serialize;

use crate::config::HeadConfig;
use crate::error::Result;

/// The head-tag rule a violation was raised by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadRule {
    Noindex,
    Hreflang,
    Canonical,
}

impl HeadRule {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Noindex => "noindex",
            Self::Hreflang => "hreflang",
            Self::Canonical => "canonical",
        }
    }

    /// The rule that applies to a page category.
    #[must_use]
    pub const fn for_kind(kind: PageKind) -> Self {
        match kind {
            PageKind::Noindex => Self::Noindex,
            PageKind::List => Self::Hreflang,
            PageKind::Ordinary => Self::Canonical,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadViolation {
    pub file: String,
    pub rule: HeadRule,
    pub issue: String,
}

/// Evaluates head-tag rules against raw document content.
pub trait Checker {
    /// At most one violation per applicable rule.
    fn check(&self, rel_path: &str, content: &str) -> Option<HeadViolation>;
}

#[derive(Debug)]
pub struct HeadChecker {
    classifier: PageClassifier,
    canonical_marker: String,
    noindex_marker: String,
    hreflang: Vec<String>,
}

impl HeadChecker {
    /// # Errors
    /// Returns an error if the list-page pattern cannot be built.
    pub fn new(head: &HeadConfig, extension: &str, index_stem: &str) -> Result<Self> {
        Ok(Self {
            classifier: PageClassifier::new(head, extension, index_stem)?,
            canonical_marker: head.canonical_marker.clone(),
            noindex_marker: head.noindex_marker.clone(),
            hreflang: head.hreflang.clone(),
        })
    }

    fn missing_hreflang<'a>(&'a self, content: &str) -> Vec<&'a str> {
        self.hreflang
            .iter()
            .filter(|code| !content.contains(&format!(r#"hreflang="{code}""#)))
            .map(String::as_str)
            .collect()
    }

    fn issue(&self, kind: PageKind, content: &str) -> Option<String> {
        match kind {
            PageKind::Noindex => (!content.contains(&self.noindex_marker))
                .then(|| format!("Missing {} marker", self.noindex_marker)),
            PageKind::List => {
                let missing = self.missing_hreflang(content);
                (!missing.is_empty()).then(|| {
                    let codes: Vec<_> = missing
                        .iter()
                        .map(|c| format!(r#"hreflang="{c}""#))
                        .collect();
                    format!("Missing {}", codes.join(", "))
                })
            }
            PageKind::Ordinary => (!content.contains(&self.canonical_marker))
                .then(|| format!("Missing canonical link ({})", self.canonical_marker)),
        }
    }
}

impl Checker for HeadChecker {
    fn check(&self, rel_path: &str, content: &str) -> Option<HeadViolation> {
        let kind = self.classifier.classify(rel_path);
        self.issue(kind, content).map(|issue| HeadViolation {
            file: rel_path.to_string(),
            rule: HeadRule::for_kind(kind),
            issue,
        })
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
