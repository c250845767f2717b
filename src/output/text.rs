use std::fmt::Write;

use crate::audit::AuditReport;
use crate::error::Result;

use super::{ColorMode, ReportFormatter, ansi, group_by};

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var_os("NO_COLOR").is_some() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn write_missing_links(&self, report: &AuditReport, out: &mut String) {
        if report.missing_links.is_empty() {
            let _ = writeln!(out, "{}", self.colorize("✅ All links are valid!", ansi::GREEN));
            return;
        }

        let heading = format!(
            "❌ Found {} broken link(s):",
            report.missing_links.len()
        );
        let _ = writeln!(out, "{}\n", self.colorize(&heading, ansi::RED));

        for (source, findings) in group_by(&report.missing_links, |f| f.source.clone()) {
            let _ = writeln!(out, "  Source: {source}");
            for finding in findings {
                let _ = writeln!(out, "    {}", self.colorize(&finding.link, ansi::YELLOW));
                let _ = writeln!(out, "      Resolved: {}", finding.resolved);
            }
            out.push('\n');
        }
    }

    fn write_head_violations(&self, report: &AuditReport, out: &mut String) {
        if !report.head_checked {
            return;
        }
        if report.head_violations.is_empty() {
            let _ = writeln!(
                out,
                "{}",
                self.colorize("✅ All head tags are valid!", ansi::GREEN)
            );
            return;
        }

        let heading = format!(
            "❌ Found {} head tag issue(s):",
            report.head_violations.len()
        );
        let _ = writeln!(out, "{}\n", self.colorize(&heading, ansi::RED));

        for (rule, violations) in group_by(&report.head_violations, |v| v.rule) {
            let _ = writeln!(out, "  [{}]", rule.as_str());
            for violation in violations {
                let _ = writeln!(out, "    {}: {}", violation.file, violation.issue);
            }
            out.push('\n');
        }
    }

    fn write_summary(&self, report: &AuditReport, out: &mut String) {
        if self.verbose > 0 {
            let _ = writeln!(
                out,
                "Scanned {} documents; {} unique internal links ({} from navigation)",
                report.documents, report.links, report.nav_links
            );
        }

        let broken = self.colorize(&report.missing_links.len().to_string(), ansi::RED);
        let mut summary = format!(
            "Summary: {} documents, {} internal links, {broken} broken",
            report.documents, report.links
        );
        if report.head_checked {
            let issues = self.colorize(&report.head_violations.len().to_string(), ansi::RED);
            let _ = write!(summary, ", {issues} head tag issues");
        }
        let _ = writeln!(out, "{summary}");
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &AuditReport) -> Result<String> {
        let mut out = String::new();
        self.write_missing_links(report, &mut out);
        self.write_head_violations(report, &mut out);
        out.push('\n');
        self.write_summary(report, &mut out);
        Ok(out)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
