//! # Chatstat
//!
//! A Rust library for turning a WhatsApp "Export chat" text file into
//! activity, word and emoji statistics.
//!
//! ## Overview
//!
//! Chatstat works in two stages:
//! - **Parsing**: the raw export is split into timestamped [`Message`]
//!   records. Android and iOS layouts, 12h and 24h clocks and multi-line
//!   messages are handled; system notices become `group_notification`
//!   records.
//! - **Analysis**: pure functions over `&[Message]` compute headline
//!   numbers, busiest users, timelines, weekday and hour activity, common
//!   words, emoji usage and two-user comparisons, either for the whole chat
//!   or for a single sender.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatstat::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let export = "\
//! 01/01/24, 10:00 - Alice: hello
//! 01/01/24, 10:05 - Bob: <Media omitted>
//! ";
//!     let messages = parse(export)?;
//!
//!     let stats = fetch_stats(&messages, &Selection::Overall);
//!     assert_eq!((stats.messages, stats.words, stats.media, stats.links), (2, 1, 1, 0));
//!
//!     let busy = most_busy_users(&messages, 5);
//!     assert_eq!(busy.shares.len(), 2);
//!     Ok(())
//! }
//! ```
//!
//! ## Sessions
//!
//! An [`AnalysisSession`](session::AnalysisSession) keeps the loaded chat
//! together with the stop words and emoji classifier, and produces a full
//! [`AnalysisReport`](report::AnalysisReport) per selection:
//!
//! ```rust,no_run
//! use chatstat::prelude::*;
//!
//! let mut session = AnalysisSession::new()
//!     .with_stop_words(StopWords::from_file("stopwords.txt")?);
//! session.load_file("WhatsApp Chat with Team.txt")?;
//!
//! for user in session.users() {
//!     let report = session.analyze(&Selection::from_label(&user));
//!     println!("{user}: {} messages", report.stats.messages);
//! }
//! # Ok::<(), chatstat::ChatstatError>(())
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - export parsing ([`ChatParser`](parser::ChatParser), [`parse`](parser::parse))
//! - [`message`] - the [`Message`] record and its derived calendar fields
//! - [`analysis`] - aggregation functions and their result tables
//! - [`report`] - [`AnalysisReport`](report::AnalysisReport) plus text, CSV and JSON output
//! - [`session`] - [`AnalysisSession`](session::AnalysisSession)
//! - [`config`] - [`ParserConfig`](config::ParserConfig), [`AnalysisConfig`](config::AnalysisConfig)
//! - [`error`] - [`ChatstatError`], [`Result`]
//! - [`cli`] / [`logging`] - binary support (requires `cli` feature)
//! - [`prelude`] - convenient re-exports

pub mod analysis;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
#[cfg(feature = "cli")]
pub mod logging;
pub mod message;
pub mod parser;
pub mod report;
pub mod session;

// Re-export the main types at the crate root for convenience
pub use error::{ChatstatError, Result};
pub use message::Message;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatstat::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Message;

    pub use crate::error::{ChatstatError, Result};

    pub use crate::parser::{ChatParser, parse};

    pub use crate::config::{AnalysisConfig, DEFAULT_DATE_ORDER, DateOrder, ParserConfig};

    pub use crate::analysis::{
        EmojiClassifier, FrequencyTable, Selection, StopWords, UnicodeEmoji, activity_heatmap,
        compare_users, daily_timeline, emoji_frequency, fetch_stats, month_activity_map,
        monthly_timeline, most_busy_users, most_common_words, user_list, week_activity_map,
        wordcloud_text,
    };

    pub use crate::report::{AnalysisReport, render_text};
    #[cfg(feature = "csv-output")]
    pub use crate::report::{stats_to_csv, write_stats_csv};
    #[cfg(feature = "json-output")]
    pub use crate::report::{report_to_json, write_report_json};

    pub use crate::session::AnalysisSession;
}
