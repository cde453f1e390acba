//! Bundled analysis results and their writers.
//!
//! [`AnalysisReport`] runs every aggregation for one [`Selection`] and keeps
//! the results together, so a front end can render or export them in one go.
//!
//! - [`render_text`] / [`render_comparison`] - plain-text tables for a terminal
//! - [`write_stats_csv`] / [`stats_to_csv`] - the headline metrics as `Metric,Count` CSV - requires `csv-output` feature
//! - [`write_report_json`] / [`report_to_json`] - the full report as JSON - requires `json-output` feature
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "csv-output")]
//! # fn main() -> chatstat::Result<()> {
//! use chatstat::analysis::{Selection, StopWords, UnicodeEmoji};
//! use chatstat::config::AnalysisConfig;
//! use chatstat::parser::parse;
//! use chatstat::report::{AnalysisReport, stats_to_csv};
//!
//! let messages = parse("01/01/24, 10:00 - Alice: hello\n01/01/24, 10:05 - Bob: <Media omitted>\n")?;
//! let report = AnalysisReport::build(
//!     &messages,
//!     &Selection::Overall,
//!     &AnalysisConfig::default(),
//!     &StopWords::empty(),
//!     &UnicodeEmoji,
//! );
//!
//! let csv = stats_to_csv(&report.stats)?;
//! assert!(csv.starts_with("Metric,Count\n"));
//! assert!(csv.contains("Media Shared,1"));
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "csv-output"))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
mod text;

#[cfg(feature = "csv-output")]
pub use csv_writer::{stats_to_csv, write_stats_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{report_to_json, write_report_json};
pub use text::{render_comparison, render_text};

use serde::Serialize;

use crate::Message;
use crate::analysis::{
    BusyUsers, DailyCount, EmojiClassifier, FrequencyTable, Heatmap, MonthlyCount, Selection,
    StopWords, TopStats, UserComparison, activity_heatmap, daily_timeline, emoji_frequency,
    fetch_stats, month_activity_map, monthly_timeline, most_busy_users, most_common_words,
    week_activity_map,
};
use crate::config::AnalysisConfig;

/// Every table computed for one selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    /// `"Overall"` or the selected sender
    pub selection: String,
    pub stats: TopStats,
    /// Only computed for the overall selection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub busy_users: Option<BusyUsers>,
    pub common_words: FrequencyTable,
    pub emojis: FrequencyTable,
    pub monthly_timeline: Vec<MonthlyCount>,
    pub daily_timeline: Vec<DailyCount>,
    pub week_activity: FrequencyTable,
    pub month_activity: FrequencyTable,
    pub heatmap: Heatmap,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<Vec<UserComparison>>,
}

impl AnalysisReport {
    /// Runs all aggregations over `messages` for `selection`.
    pub fn build(
        messages: &[Message],
        selection: &Selection,
        config: &AnalysisConfig,
        stop_words: &StopWords,
        classifier: &dyn EmojiClassifier,
    ) -> Self {
        Self {
            selection: selection.label().to_string(),
            stats: fetch_stats(messages, selection),
            busy_users: selection
                .is_overall()
                .then(|| most_busy_users(messages, config.top_users)),
            common_words: most_common_words(messages, selection, stop_words, config.top_words),
            emojis: emoji_frequency(messages, selection, classifier),
            monthly_timeline: monthly_timeline(messages, selection),
            daily_timeline: daily_timeline(messages, selection),
            week_activity: week_activity_map(messages, selection),
            month_activity: month_activity_map(messages, selection),
            heatmap: activity_heatmap(messages, selection),
            comparison: None,
        }
    }

    /// Attaches a two-user comparison.
    #[must_use]
    pub fn with_comparison(mut self, rows: Vec<UserComparison>) -> Self {
        self.comparison = Some(rows);
        self
    }
}
