use anyhow::{Context, Result};
use serde::Serialize;

/// One input path and what it became
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathReport {
    pub input: String,
    pub output: String,
}

impl PathReport {
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

/// One output per line, in input order
pub fn render_plain(reports: &[PathReport]) -> String {
    reports
        .iter()
        .map(|report| report.output.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_json(reports: &[PathReport]) -> Result<String> {
    serde_json::to_string_pretty(reports).context("Failed to serialize results")
}
