use regex::Regex;

use super::{LinkReference, LinkSource};

/// Pulls `href: "..."` targets out of the navigation definition script.
///
/// Only root-relative, non-`http` targets are kept. Every reference is filed
/// under one synthetic source label so a broken menu entry is reported once.
pub struct NavExtractor {
    pattern: Regex,
    label: String,
}

impl NavExtractor {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            pattern: Regex::new(r#"href\s*:\s*["']([^"']+)["']"#).expect("Invalid regex"),
            label: label.into(),
        }
    }

    #[must_use]
    pub fn extract(&self, content: &str) -> Vec<LinkReference> {
        self.pattern
            .captures_iter(content)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .filter(|target| target.starts_with('/') && !target.starts_with("http"))
            .map(|target| LinkReference::new(LinkSource::Navigation(self.label.clone()), target))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAV_SCRIPT: &str = r#"
      const navConfig = {
        en: {
          items: [
            { label: 'About', href: '/#about' },
            { label: 'Projects', href: '/projects/' },
            { label: 'Blog', href: 'https://blog.example.com' },
            { label: 'Top', href: '#top' },
          ],
        },
        zh: {
          items: [
            { label: '项目', href: "/zh/projects/" },
          ],
        },
      };
    "#;

    #[test]
    fn extracts_root_relative_targets() {
        let nav = NavExtractor::new("[nav-config]");
        let targets: Vec<_> = nav
            .extract(NAV_SCRIPT)
            .into_iter()
            .map(|r| r.link)
            .collect();

        assert_eq!(targets, vec!["/#about", "/projects/", "/zh/projects/"]);
    }

    #[test]
    fn all_targets_use_the_synthetic_label() {
        let nav = NavExtractor::new("[menu]");
        let refs = nav.extract(NAV_SCRIPT);

        assert!(!refs.is_empty());
        assert!(
            refs.iter()
                .all(|r| r.source == LinkSource::Navigation("[menu]".to_string()))
        );
    }

    #[test]
    fn relative_targets_are_skipped() {
        let nav = NavExtractor::new("[nav-config]");
        assert!(nav.extract("{ href: './local.html' }").is_empty());
    }

    #[test]
    fn markup_style_attributes_are_not_nav_entries() {
        let nav = NavExtractor::new("[nav-config]");
        assert!(nav.extract(r#"<a href="/projects/">"#).is_empty());
    }
}
