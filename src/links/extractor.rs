use regex::Regex;

use super::{LinkReference, LinkSource};

const EXTERNAL_PREFIXES: &[&str] = &["http://", "https://", "mailto:"];
const INTERNAL_PREFIXES: &[&str] = &["/", "./", "../"];

/// Whether a reference uses an external protocol.
#[must_use]
pub fn is_external(link: &str) -> bool {
    EXTERNAL_PREFIXES.iter().any(|p| link.starts_with(p))
}

/// Whether a reference points inside the site.
///
/// The protocol check runs first, so a scheme-bearing reference is never
/// internal whatever its leading characters.
#[must_use]
pub fn is_internal(link: &str) -> bool {
    !is_external(link) && INTERNAL_PREFIXES.iter().any(|p| link.starts_with(p))
}

/// Pulls `href="..."` / `href='...'` values out of markup.
pub struct LinkExtractor {
    href_pattern: Regex,
}

impl Default for LinkExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self {
            href_pattern: Regex::new(r#"href=["']([^"']+)["']"#).expect("Invalid regex"),
        }
    }

    /// Every href value in the content, in document order, unfiltered.
    pub fn hrefs<'a>(&'a self, content: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.href_pattern
            .captures_iter(content)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Internal references found in a document. Duplicates are kept; the
    /// link table collapses them.
    #[must_use]
    pub fn extract(&self, source_path: &str, content: &str) -> Vec<LinkReference> {
        self.hrefs(content)
            .filter(|link| is_internal(link))
            .map(|link| LinkReference::new(LinkSource::Document(source_path.to_string()), link))
            .collect()
    }
}

#[cfg(test)]
#[path = "extractor_tests.rs"]
mod tests;
