use super::*;

#[test]
fn default_config_matches_site_conventions() {
    let config = Config::default();
    assert_eq!(config.scanner.extension, "html");
    assert_eq!(config.scanner.skip_dirs, vec!["node_modules"]);
    assert_eq!(config.links.nav_source, "assets/js/site-nav.js");
    assert_eq!(config.links.index_stem, "index");
    assert!(config.head.enabled);
    assert_eq!(config.head.hreflang, vec!["en", "zh-cn"]);
    assert_eq!(config.head.canonical_marker, r#"rel="canonical""#);
}

#[test]
fn empty_toml_yields_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn partial_section_keeps_other_defaults() {
    let config: Config = toml::from_str(
        r#"
[head]
sections = ["blog"]
"#,
    )
    .unwrap();

    assert_eq!(config.head.sections, vec!["blog"]);
    assert_eq!(config.head.language_prefixes, vec!["zh"]);
    assert!(config.head.enabled);
    assert_eq!(config.scanner, ScannerConfig::default());
}

#[test]
fn scanner_section_parses() {
    let config: Config = toml::from_str(
        r#"
version = "1"

[scanner]
extension = "htm"
skip_dirs = ["vendor", "node_modules"]
exclude = ["drafts/**"]
"#,
    )
    .unwrap();

    assert_eq!(config.version.as_deref(), Some("1"));
    assert_eq!(config.scanner.extension, "htm");
    assert_eq!(config.scanner.skip_dirs.len(), 2);
    assert_eq!(config.scanner.exclude, vec!["drafts/**"]);
}

#[test]
fn serializes_without_version_when_unset() {
    let text = toml::to_string(&Config::default()).unwrap();
    assert!(!text.contains("version"));
    assert!(text.contains("[scanner]"));
    assert!(text.contains("[head]"));
}
