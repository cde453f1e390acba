//! JSON export of a full report.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::AnalysisReport;
use crate::error::Result;

/// Writes the report as pretty-printed JSON.
pub fn write_report_json(report: &AnalysisReport, output_path: impl AsRef<Path>) -> Result<()> {
    let json = report_to_json(report)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Same output as [`write_report_json`], returned as a string.
pub fn report_to_json(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
