//! Configuration semantic validation.
//!
//! Checks values that parse fine but cannot drive an audit.

use globset::Glob;

use crate::config::Config;
use crate::{Result, SiteAuditError};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if the extension is empty or dotted, exclude globs are
/// invalid, or the head rule lists contain empty entries.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_scanner_section(config)?;
    validate_links_section(config)?;
    validate_head_section(config)?;
    Ok(())
}

fn validate_scanner_section(config: &Config) -> Result<()> {
    let extension = &config.scanner.extension;
    if extension.is_empty() || extension.starts_with('.') {
        return Err(SiteAuditError::Config(format!(
            "scanner.extension must be non-empty and without a leading dot, got '{extension}'"
        )));
    }

    for pattern in &config.scanner.exclude {
        Glob::new(pattern).map_err(|source| SiteAuditError::InvalidPattern {
            pattern: pattern.clone(),
            source,
        })?;
    }
    Ok(())
}

fn validate_links_section(config: &Config) -> Result<()> {
    if config.links.index_stem.is_empty() {
        return Err(SiteAuditError::Config(
            "links.index_stem must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_head_section(config: &Config) -> Result<()> {
    let head = &config.head;
    if !head.enabled {
        return Ok(());
    }

    if head.hreflang.is_empty() {
        return Err(SiteAuditError::Config(
            "head.hreflang must list at least one language code".to_string(),
        ));
    }

    let lists = [
        ("head.sections", &head.sections),
        ("head.language_prefixes", &head.language_prefixes),
        ("head.hreflang", &head.hreflang),
        ("head.noindex_pages", &head.noindex_pages),
    ];
    for (name, values) in lists {
        if let Some(i) = values.iter().position(|v| v.trim().is_empty()) {
            return Err(SiteAuditError::Config(format!(
                "{name}[{i}] must not be empty"
            )));
        }
    }

    if head.canonical_marker.is_empty() || head.noindex_marker.is_empty() {
        return Err(SiteAuditError::Config(
            "head markers must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
