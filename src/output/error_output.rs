//! Colored error and warning lines on stderr.
//!
//! Format: `✖ Type: message` / `⚠ Warning: message`, then optional
//! `  × detail` and `  help: suggestion` lines.

use std::io::{IsTerminal, Write};

use super::ColorMode;
use super::ansi;
use crate::error::SiteAuditError;

pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        let use_colors = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => Self::stderr_supports_color(),
        };
        Self { use_colors }
    }

    /// Auto-detect color support on stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(ColorMode::Auto)
    }

    fn stderr_supports_color() -> bool {
        // Presence of NO_COLOR (any value) disables color, per https://no-color.org
        std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal()
    }

    /// Print a fatal error with its detail and suggestion.
    pub fn print_error(&self, err: &SiteAuditError) {
        let mut stderr = std::io::stderr().lock();
        self.write_error(&mut stderr, err);
    }

    pub fn print_warning(&self, message: &str, detail: Option<&str>, suggestion: Option<&str>) {
        let mut stderr = std::io::stderr().lock();
        self.write_warning(&mut stderr, message, detail, suggestion);
    }

    pub fn write_error<W: Write>(&self, w: &mut W, err: &SiteAuditError) {
        let detail = err.detail();
        self.write_block(
            w,
            (ansi::RED, &format!("✖ {}:", err.error_type())),
            &err.message(),
            detail.as_deref(),
            err.suggestion(),
        );
    }

    pub fn write_warning<W: Write>(
        &self,
        w: &mut W,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        self.write_block(w, (ansi::YELLOW, "⚠ Warning:"), message, detail, suggestion);
    }

    fn write_block<W: Write>(
        &self,
        w: &mut W,
        (color, heading): (&str, &str),
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        // Write failures on stderr are ignored: there is nowhere left to report them.
        if self.use_colors {
            let _ = writeln!(w, "{}{color}{heading}{} {message}", ansi::BOLD, ansi::RESET);
        } else {
            let _ = writeln!(w, "{heading} {message}");
        }

        if let Some(d) = detail {
            if self.use_colors {
                let _ = writeln!(w, "  {}× {d}{}", ansi::DIM, ansi::RESET);
            } else {
                let _ = writeln!(w, "  × {d}");
            }
        }

        if let Some(s) = suggestion {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {s}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {s}");
            }
        }
    }
}

impl Default for ErrorOutput {
    fn default() -> Self {
        Self::stderr()
    }
}

/// Print a fatal error using auto-detected color mode.
pub fn print_error_full(err: &SiteAuditError) {
    ErrorOutput::stderr().print_error(err);
}

pub fn print_warning_full(message: &str, detail: Option<&str>, suggestion: Option<&str>) {
    ErrorOutput::stderr().print_warning(message, detail, suggestion);
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
