//! Report rendering
//!
//! The text lines are a stable interface: downstream tooling scrapes
//! the per-check labels, the pass/fail words, and the final total, so
//! wording here must not drift.

use crate::types::{CheckResult, Report};
use serde::Serialize;

pub const REPORT_HEADER: &str = "========== Indexing Lab Auto-Report ==========";
pub const REPORT_SEPARATOR: &str = "----------------------------------------------";

/// Render the report as ordered text lines: header, one line per check,
/// the captured database error (if any), separator, total.
pub fn render_lines(report: &Report, db_error: Option<&str>) -> Vec<String> {
    let mut lines = Vec::with_capacity(report.results.len() + 4);
    lines.push(REPORT_HEADER.to_string());
    for result in &report.results {
        let status = if result.passed { "PASS" } else { "FAIL" };
        lines.push(format!("{}: {} ({})", result.label, status, result.detail));
    }
    if let Some(err) = db_error {
        lines.push(format!("DB Connection Error: {err}"));
    }
    lines.push(REPORT_SEPARATOR.to_string());
    lines.push(format!("TOTAL SCORE: {} / {}", report.total, report.max));
    lines
}

/// Machine-readable envelope for `--json` runs.
#[derive(Debug, Serialize)]
pub struct ReportEnvelope<'a> {
    pub run_id: String,
    pub results: &'a [CheckResult],
    pub db_error: Option<&'a str>,
    pub total_score: u32,
    pub max_score: u32,
    pub passed: bool,
}
