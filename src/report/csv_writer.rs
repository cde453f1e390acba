//! CSV export of the headline metrics.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::analysis::TopStats;
use crate::error::Result;

const HEADER: [&str; 2] = ["Metric", "Count"];

fn write_rows<W: std::io::Write>(writer: &mut Writer<W>, stats: &TopStats) -> Result<()> {
    writer.write_record(HEADER)?;
    for (label, value) in stats.metrics() {
        writer.write_record([label, value.to_string().as_str()])?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the four metrics to a CSV file.
///
/// # Format
/// - Delimiter: `,`
/// - Header: `Metric,Count`
/// - Rows: `Total Messages`, `Total Words`, `Media Shared`, `Links Shared`
pub fn write_stats_csv(stats: &TopStats, output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = Writer::from_writer(file);
    write_rows(&mut writer, stats)
}

/// Same format as [`write_stats_csv`], returned as a string.
pub fn stats_to_csv(stats: &TopStats) -> Result<String> {
    let mut writer = Writer::from_writer(Vec::new());
    write_rows(&mut writer, stats)?;
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}
