//! Shared plumbing for commands: config loading, color mapping, output sink.

use std::fs;
use std::path::Path;

use crate::cli::ColorChoice;
use crate::config::{ConfigLoader, FileConfigLoader, LoadResult};
use crate::output::ColorMode;
use crate::{Config, Result};

#[must_use]
pub const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Load the effective configuration.
///
/// An explicit path wins over `--no-config`; with neither, the default
/// search order applies.
///
/// # Errors
/// Returns an error if the selected config file cannot be read or is invalid.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<LoadResult> {
    let loader = FileConfigLoader::new();
    match config_path {
        Some(path) => loader.load_from_path(path),
        None if no_config => Ok(LoadResult {
            config: Config::default(),
            source: None,
        }),
        None => loader.load(),
    }
}

/// Write to a file, or to stdout unless `quiet` is set.
///
/// # Errors
/// Returns an error if the output file cannot be written.
pub fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}
