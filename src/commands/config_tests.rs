use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use super::*;
use crate::Config;

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("audit.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn validate_reports_source_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[scanner]\nextension = \"htm\"\n");

    let out = run_config_validate_impl(Some(&path), false).unwrap();
    assert!(out.starts_with("Configuration is valid: "));
    assert!(out.contains("audit.toml"));
}

#[test]
fn validate_without_config_uses_defaults() {
    let out = run_config_validate_impl(None, true).unwrap();
    assert!(out.contains("built-in defaults"));
}

#[test]
fn validate_rejects_bad_extension() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[scanner]\nextension = \".html\"\n");

    let err = run_config_validate_impl(Some(&path), false).unwrap_err();
    assert!(err.to_string().contains("scanner.extension"));
}

#[test]
fn show_text_is_round_trippable_toml() {
    let out = run_config_show_impl(None, true, OutputFormat::Text).unwrap();
    assert!(out.starts_with("# Source: built-in defaults\n"));

    let parsed: Config = toml::from_str(&out).unwrap();
    assert_eq!(parsed, Config::default());
}

#[test]
fn show_json_reflects_file_values() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[head]\nsections = [\"blog\"]\n");

    let out = run_config_show_impl(Some(&path), false, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["head"]["sections"][0], "blog");
    assert_eq!(value["scanner"]["extension"], "html");
}
