use std::io::IsTerminal;

use indicatif::{ProgressBar, ProgressStyle};

use super::print_warning_full;

/// Stage lines, warnings and a per-document progress bar, all on stderr.
///
/// Stage lines and warnings are dropped in quiet mode. The bar is hidden in quiet mode or
/// when stderr is not a TTY.
pub struct AuditProgress {
    quiet: bool,
    progress_bar: ProgressBar,
}

impl AuditProgress {
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        Self::new_with_visibility(quiet, is_tty)
    }

    /// Silent reporter, for library callers and tests.
    #[must_use]
    pub fn hidden() -> Self {
        Self::new_with_visibility(true, false)
    }

    fn new_with_visibility(quiet: bool, is_tty: bool) -> Self {
        let progress_bar = if quiet || !is_tty {
            ProgressBar::hidden()
        } else {
            Self::create_visible_progress_bar()
        };
        Self {
            quiet,
            progress_bar,
        }
    }

    /// # Panics
    /// Never in practice: the template is a constant.
    fn create_visible_progress_bar() -> ProgressBar {
        let pb = ProgressBar::new(0);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} Reading [{bar:40.cyan/blue}] {pos}/{len} documents")
                .expect("valid template")
                .progress_chars("█▓░"),
        );
        pb
    }

    /// Print one progress line.
    pub fn stage(&self, message: &str) {
        if !self.quiet {
            eprintln!("{message}");
        }
    }

    /// Print a non-fatal warning.
    pub fn warn(&self, message: &str, suggestion: Option<&str>) {
        if !self.quiet {
            self.progress_bar
                .suspend(|| print_warning_full(message, None, suggestion));
        }
    }

    pub fn start(&self, total: u64) {
        self.progress_bar.set_length(total);
        self.progress_bar.set_position(0);
    }

    pub fn inc(&self) {
        self.progress_bar.inc(1);
    }

    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }

    #[cfg(test)]
    fn position(&self) -> u64 {
        self.progress_bar.position()
    }

    #[cfg(test)]
    fn is_hidden(&self) -> bool {
        self.progress_bar.is_hidden()
    }
}
