//! Internal link graph: extraction from markup and the navigation
//! definition, deduplication, and resolution against the site tree.

mod extractor;
mod nav;
mod resolver;

pub use extractor::{LinkExtractor, is_external, is_internal};
pub use nav::NavExtractor;
pub use resolver::{MissingLinkFinding, PathResolver};

use std::fmt;

use indexmap::IndexSet;

/// Where a link reference was found.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LinkSource {
    /// A markup document, by `/`-separated path relative to the site root.
    Document(String),
    /// The shared navigation definition, reported under a fixed label.
    Navigation(String),
}

impl LinkSource {
    /// Directory relative references are resolved from, relative to the
    /// site root. Navigation links resolve from the root.
    #[must_use]
    pub fn base_dir(&self) -> &str {
        match self {
            Self::Document(path) => path.rsplit_once('/').map_or("", |(dir, _)| dir),
            Self::Navigation(_) => "",
        }
    }
}

impl fmt::Display for LinkSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Document(path) | Self::Navigation(path) => f.write_str(path),
        }
    }
}

/// A raw link string paired with its source. Identity is the pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LinkReference {
    pub source: LinkSource,
    pub link: String,
}

impl LinkReference {
    #[must_use]
    pub fn new(source: LinkSource, link: impl Into<String>) -> Self {
        Self {
            source,
            link: link.into(),
        }
    }
}

/// Deduplicated set of link references for one run.
///
/// Insertion order is kept so reports are deterministic.
#[derive(Debug, Default)]
pub struct LinkTable {
    links: IndexSet<LinkReference>,
}

impl LinkTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, references: impl IntoIterator<Item = LinkReference>) {
        self.links.extend(references);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LinkReference> {
        self.links.iter()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
