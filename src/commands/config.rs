use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigArgs};
use crate::config::LoadResult;
use crate::output::{OutputFormat, print_error_full};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::context::load_config;

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    let result = match &args.action {
        ConfigAction::Validate { config } => {
            run_config_validate_impl(config.as_deref(), cli.no_config)
        }
        ConfigAction::Show { config, format } => {
            run_config_show_impl(config.as_deref(), cli.no_config, *format)
        }
    };

    match result {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            print_error_full(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Loading runs both syntax and semantic validation.
///
/// # Errors
/// Returns the first problem found in the configuration.
pub fn run_config_validate_impl(config_path: Option<&Path>, no_config: bool) -> Result<String> {
    let loaded = load_config(config_path, no_config)?;
    Ok(match loaded.source {
        Some(path) => format!("Configuration is valid: {}\n", path.display()),
        None => "No configuration file found; built-in defaults are valid\n".to_string(),
    })
}

/// # Errors
/// Returns an error if the configuration cannot be loaded or serialized.
pub fn run_config_show_impl(
    config_path: Option<&Path>,
    no_config: bool,
    format: OutputFormat,
) -> Result<String> {
    let loaded = load_config(config_path, no_config)?;
    match format {
        OutputFormat::Text => format_config_text(&loaded),
        OutputFormat::Json => {
            let mut text = serde_json::to_string_pretty(&loaded.config)?;
            text.push('\n');
            Ok(text)
        }
    }
}

/// Effective configuration as TOML, headed by where it came from.
///
/// # Errors
/// Returns an error if the configuration cannot be serialized.
pub fn format_config_text(loaded: &LoadResult) -> Result<String> {
    let source = loaded
        .source
        .as_ref()
        .map_or_else(|| "built-in defaults".to_string(), |p| p.display().to_string());
    let body = toml::to_string_pretty(&loaded.config)?;
    Ok(format!("# Source: {source}\n{body}"))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
