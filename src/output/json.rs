use serde::Serialize;

use crate::audit::AuditReport;
use crate::checker::HeadViolation;
use crate::error::Result;
use crate::links::MissingLinkFinding;

use super::ReportFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    missing_links: &'a [MissingLinkFinding],
    #[serde(skip_serializing_if = "Option::is_none")]
    head_violations: Option<&'a [HeadViolation]>,
}

#[derive(Serialize)]
struct Summary {
    documents: usize,
    links: usize,
    nav_links: usize,
    missing_links: usize,
    head_violations: usize,
    passed: bool,
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &AuditReport) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                documents: report.documents,
                links: report.links,
                nav_links: report.nav_links,
                missing_links: report.missing_links.len(),
                head_violations: report.head_violations.len(),
                passed: report.is_clean(),
            },
            missing_links: &report.missing_links,
            head_violations: report
                .head_checked
                .then_some(report.head_violations.as_slice()),
        };

        let mut text = serde_json::to_string_pretty(&output)?;
        text.push('\n');
        Ok(text)
    }
}
