pub mod audit;
pub mod checker;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod filesystem;
pub mod links;
pub mod output;
pub mod path_utils;
pub mod scanner;

pub use audit::{AuditReport, Auditor};
pub use config::Config;
pub use error::{Result, SiteAuditError};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FINDINGS: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
