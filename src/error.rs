use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteAuditError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Cannot access site root: {path}")]
    RootAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to traverse directory: {path}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Invalid regex pattern: {pattern}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl SiteAuditError {
    /// Short category label used as the heading of the error line.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) | Self::TomlSerialize(_) => "Config",
            Self::RootAccess { .. } => "SiteRoot",
            Self::Walk { .. } => "Traversal",
            Self::FileRead { .. } => "FileRead",
            Self::InvalidPattern { .. } | Self::InvalidRegex { .. } => "Pattern",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "Output",
        }
    }

    /// The primary message, without the category prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) => msg.clone(),
            Self::RootAccess { path, .. }
            | Self::Walk { path, .. }
            | Self::FileRead { path, .. } => path.display().to_string(),
            Self::InvalidPattern { pattern, .. } | Self::InvalidRegex { pattern, .. } => {
                pattern.clone()
            }
            Self::Io(e) => e.to_string(),
            Self::TomlParse(e) => e.to_string(),
            Self::TomlSerialize(e) => e.to_string(),
            Self::JsonSerialize(e) => e.to_string(),
        }
    }

    /// Underlying cause, if the variant wraps one.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::RootAccess { source, .. } | Self::FileRead { source, .. } => {
                Some(source.to_string())
            }
            Self::Walk { source, .. } => Some(source.to_string()),
            Self::InvalidPattern { source, .. } => Some(source.to_string()),
            Self::InvalidRegex { source, .. } => Some(source.to_string()),
            _ => None,
        }
    }

    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Config(_) | Self::TomlParse(_) => {
                Some("Check the config file format; `site-audit init` writes a valid template")
            }
            Self::RootAccess { source, .. } | Self::FileRead { source, .. } => {
                match source.kind() {
                    std::io::ErrorKind::NotFound => Some("Check that the file path exists"),
                    std::io::ErrorKind::PermissionDenied => Some("Check file permissions"),
                    _ => None,
                }
            }
            Self::InvalidPattern { .. } => Some("Check glob syntax, e.g. `drafts/**`"),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteAuditError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
