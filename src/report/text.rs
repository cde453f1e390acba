//! Plain-text rendering for terminals.

use std::fmt::Write;

use super::AnalysisReport;
use crate::analysis::{FrequencyTable, UserComparison};

const BAR_WIDTH: usize = 30;

/// Renders every table of the report.
pub fn render_text(report: &AnalysisReport) -> String {
    let mut out = String::new();

    section(&mut out, &format!("Top Statistics ({})", report.selection));
    for (label, value) in report.stats.metrics() {
        let _ = writeln!(out, "  {label:<16} {value:>8}");
    }

    if let Some(busy) = &report.busy_users {
        section(&mut out, "Most Busy Users");
        table(&mut out, &busy.top);
        let _ = writeln!(out);
        for share in &busy.shares {
            let _ = writeln!(out, "  {:<24} {:>6.2}%", share.name, share.percent);
        }
    }

    section(&mut out, "Monthly Timeline");
    for month in &report.monthly_timeline {
        let _ = writeln!(out, "  {:<24} {:>8}", month.label, month.count);
    }

    section(&mut out, "Daily Timeline");
    for day in &report.daily_timeline {
        let _ = writeln!(out, "  {:<24} {:>8}", day.date.format("%Y-%m-%d").to_string(), day.count);
    }

    section(&mut out, "Most Busy Day");
    table(&mut out, &report.week_activity);

    section(&mut out, "Most Busy Month");
    table(&mut out, &report.month_activity);

    section(&mut out, "Weekly Activity Map");
    if !report.heatmap.is_empty() {
        let _ = write!(out, "  {:<10}", "");
        for period in &report.heatmap.periods {
            let _ = write!(out, " {period:>5}");
        }
        let _ = writeln!(out);
        for (day, row) in report.heatmap.days.iter().zip(&report.heatmap.counts) {
            let _ = write!(out, "  {day:<10}");
            for count in row {
                let _ = write!(out, " {count:>5}");
            }
            let _ = writeln!(out);
        }
    }

    section(&mut out, "Most Common Words");
    table(&mut out, &report.common_words);

    section(&mut out, "Emoji Analysis");
    table(&mut out, &report.emojis);

    if let Some(rows) = &report.comparison {
        out.push_str(&render_comparison(rows));
    }

    out
}

/// Renders a two-user comparison as aligned columns.
pub fn render_comparison(rows: &[UserComparison]) -> String {
    let mut out = String::new();
    section(&mut out, "User Comparison");
    let _ = writeln!(
        out,
        "  {:<20} {:>8} {:>10} {:>6} {:>6} {:>6}",
        "User", "Messages", "Avg Words", "Media", "Links", "Emojis"
    );
    for row in rows {
        let _ = writeln!(
            out,
            "  {:<20} {:>8} {:>10.2} {:>6} {:>6} {:>6}",
            row.user, row.messages, row.avg_words, row.media, row.links, row.emojis
        );
    }
    out
}

fn section(out: &mut String, title: &str) {
    if !out.is_empty() {
        out.push('\n');
    }
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", "-".repeat(title.chars().count()));
}

/// Label, count and a bar scaled to the largest count.
fn table(out: &mut String, table: &FrequencyTable) {
    let max = table.iter().map(|row| row.count).max().unwrap_or(0);
    for row in table {
        let width = if max == 0 { 0 } else { row.count * BAR_WIDTH / max };
        let _ = writeln!(
            out,
            "  {:<24} {:>8} {}",
            row.label,
            row.count,
            "#".repeat(width.max(1))
        );
    }
}
