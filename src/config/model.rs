use serde::{Deserialize, Serialize};

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

/// Root configuration loaded from `.site-audit.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Config schema version. Missing means current.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Document discovery.
    #[serde(default)]
    pub scanner: ScannerConfig,

    /// Link extraction and resolution.
    #[serde(default)]
    pub links: LinksConfig,

    /// Head-tag (SEO metadata) rules.
    #[serde(default)]
    pub head: HeadConfig,
}

/// Scanner configuration for document discovery.
///
/// Hidden directories (name starting with `.`) are always pruned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScannerConfig {
    /// Document extension, without the leading dot.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Directory names pruned with their whole subtree.
    #[serde(default = "default_skip_dirs")]
    pub skip_dirs: Vec<String>,

    /// Extra glob patterns relative to the site root. Matching directories
    /// are pruned, matching documents are skipped.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            skip_dirs: default_skip_dirs(),
            exclude: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinksConfig {
    /// Navigation definition, relative to the site root.
    #[serde(default = "default_nav_source")]
    pub nav_source: String,

    /// Source label nav-derived links are reported under.
    #[serde(default = "default_nav_label")]
    pub nav_label: String,

    /// File stem of the index document used for directory fallback.
    #[serde(default = "default_index_stem")]
    pub index_stem: String,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            nav_source: default_nav_source(),
            nav_label: default_nav_label(),
            index_stem: default_index_stem(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeadConfig {
    /// Run head-tag checks at all.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Relative paths that must carry a noindex marker instead of a canonical tag.
    #[serde(default = "default_noindex_pages")]
    pub noindex_pages: Vec<String>,

    /// Section directory names whose `index` document is a list page.
    #[serde(default = "default_sections")]
    pub sections: Vec<String>,

    /// Optional language directory prefixes in front of a section.
    #[serde(default = "default_language_prefixes")]
    pub language_prefixes: Vec<String>,

    /// Language codes every list page must declare via `hreflang`.
    #[serde(default = "default_hreflang")]
    pub hreflang: Vec<String>,

    #[serde(default = "default_canonical_marker")]
    pub canonical_marker: String,

    #[serde(default = "default_noindex_marker")]
    pub noindex_marker: String,
}

impl Default for HeadConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            noindex_pages: default_noindex_pages(),
            sections: default_sections(),
            language_prefixes: default_language_prefixes(),
            hreflang: default_hreflang(),
            canonical_marker: default_canonical_marker(),
            noindex_marker: default_noindex_marker(),
        }
    }
}

fn default_extension() -> String {
    "html".to_string()
}

fn default_skip_dirs() -> Vec<String> {
    vec!["node_modules".to_string()]
}

fn default_nav_source() -> String {
    "assets/js/site-nav.js".to_string()
}

fn default_nav_label() -> String {
    "[nav-config]".to_string()
}

fn default_index_stem() -> String {
    "index".to_string()
}

const fn default_true() -> bool {
    true
}

fn default_noindex_pages() -> Vec<String> {
    vec!["404.html".to_string(), "en/index.html".to_string()]
}

fn default_sections() -> Vec<String> {
    ["tech-stack", "projects", "notes", "tools", "misc"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_language_prefixes() -> Vec<String> {
    vec!["zh".to_string()]
}

fn default_hreflang() -> Vec<String> {
    vec!["en".to_string(), "zh-cn".to_string()]
}

fn default_canonical_marker() -> String {
    r#"rel="canonical""#.to_string()
}

fn default_noindex_marker() -> String {
    "noindex".to_string()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
