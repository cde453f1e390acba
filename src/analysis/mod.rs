//! Aggregations over a parsed chat.
//!
//! Every function here is pure: it takes the parsed `&[Message]` plus a
//! [`Selection`] and returns a typed table. Nothing is cached and the input
//! is never modified, so calling the same function twice gives the same
//! result.
//!
//! - [`stats`] - headline numbers ([`fetch_stats`])
//! - [`users`] - busiest senders and the user picker ([`most_busy_users`], [`user_list`])
//! - [`words`] - word frequency and word-cloud text
//! - [`timeline`] - per-month and per-day counts
//! - [`activity`] - weekday, month and hour-of-week maps
//! - [`emoji`] - emoji frequency with a pluggable [`EmojiClassifier`]
//! - [`compare`] - two-user comparison
//!
//! # Example
//!
//! ```rust
//! use chatstat::analysis::{Selection, StopWords, most_common_words, monthly_timeline};
//! use chatstat::parser::parse;
//!
//! let text = "\
//! 12/03/2024, 18:01 - Alice: Rust is fun
//! 12/03/2024, 18:02 - Bob: rust rust
//! ";
//! let messages = parse(text)?;
//!
//! let words = most_common_words(&messages, &Selection::Overall, &StopWords::empty(), 20);
//! assert_eq!(words.rows()[0].label, "rust");
//! assert_eq!(words.rows()[0].count, 3);
//!
//! let months = monthly_timeline(&messages, &Selection::user("Bob"));
//! assert_eq!(months[0].label, "March-2024");
//! # Ok::<(), chatstat::ChatstatError>(())
//! ```

pub mod activity;
pub mod compare;
pub mod emoji;
pub mod frequency;
pub mod links;
pub mod selection;
pub mod stats;
pub mod timeline;
pub mod users;
pub mod words;

pub use activity::{Heatmap, activity_heatmap, month_activity_map, week_activity_map};
pub use compare::{UserComparison, compare_users};
pub use emoji::{EmojiClassifier, UnicodeEmoji, count_emojis, emoji_frequency};
pub use frequency::{FrequencyRow, FrequencyTable};
pub use links::{count_links, find_links};
pub use selection::{OVERALL, Selection, select};
pub use stats::{TopStats, fetch_stats, word_count};
pub use timeline::{DailyCount, MonthlyCount, daily_timeline, monthly_timeline};
pub use users::{BusyUsers, UserShare, distinct_users, most_busy_users, user_list};
pub use words::{StopWords, most_common_words, wordcloud_text};
