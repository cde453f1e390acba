//! The normalized chat message.
//!
//! This module provides [`Message`], one record of an export after parsing.
//! Besides the timestamp, sender and body, each message carries a set of
//! calendar fields (year, month, weekday, hour bucket) that the aggregation
//! functions group on.
//!
//! The calendar fields are computed once from the timestamp when the message
//! is built. Fields are private and only reachable through accessors, so the
//! derived values always agree with the timestamp.
//!
//! # Examples
//!
//! ```
//! use chatstat::Message;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(23, 15, 0)
//!     .unwrap();
//! let msg = Message::new(ts, "Alice", "Happy new year!");
//!
//! assert_eq!(msg.sender(), "Alice");
//! assert_eq!(msg.month_name(), "January");
//! assert_eq!(msg.day_name(), "Monday");
//! assert_eq!(msg.hour_period(), "23-00");
//! ```

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;

use crate::config::DateOrder;

/// Sender recorded for system-generated lines (joins, leaves, notices).
pub const GROUP_NOTIFICATION: &str = "group_notification";

/// Body WhatsApp writes in place of an attachment when media is not exported.
pub const MEDIA_OMITTED: &str = "<Media omitted>";

/// A single message of a parsed export.
///
/// # Serialization
///
/// Serializes to a flat object with the timestamp, sender, body and every
/// derived calendar field. There is no `Deserialize` impl; messages are only
/// produced by the parser or by [`Message::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    timestamp: NaiveDateTime,
    sender: String,
    body: String,
    #[serde(flatten)]
    time: TimeFields,
}

/// Calendar fields derived from a timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct TimeFields {
    date_only: NaiveDate,
    year: i32,
    month_num: u32,
    month_name: String,
    day_name: String,
    hour_period: String,
}

impl TimeFields {
    fn from_timestamp(ts: NaiveDateTime) -> Self {
        Self {
            date_only: ts.date(),
            year: ts.year(),
            month_num: ts.month(),
            month_name: ts.format("%B").to_string(),
            day_name: ts.format("%A").to_string(),
            hour_period: hour_period(ts.hour()),
        }
    }
}

/// Formats the one-hour bucket that starts at `hour`.
///
/// Both ends are zero-padded and the end wraps at midnight:
/// `0 -> "00-01"`, `9 -> "09-10"`, `23 -> "23-00"`.
pub fn hour_period(hour: u32) -> String {
    format!("{:02}-{:02}", hour, (hour + 1) % 24)
}

impl Message {
    /// Creates a message and computes its calendar fields.
    pub fn new(timestamp: NaiveDateTime, sender: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            timestamp,
            sender: sender.into(),
            body: body.into(),
            time: TimeFields::from_timestamp(timestamp),
        }
    }

    /// Creates a system notification (sender [`GROUP_NOTIFICATION`]).
    pub fn notification(timestamp: NaiveDateTime, body: impl Into<String>) -> Self {
        Self::new(timestamp, GROUP_NOTIFICATION, body)
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    /// Returns the wall-clock timestamp copied from the export.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Returns the sender name, or [`GROUP_NOTIFICATION`].
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message text. Multi-line messages keep their `\n`s.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the calendar date without the time of day.
    pub fn date_only(&self) -> NaiveDate {
        self.time.date_only
    }

    /// Returns the calendar year.
    pub fn year(&self) -> i32 {
        self.time.year
    }

    /// Returns the month number, 1-12.
    pub fn month_num(&self) -> u32 {
        self.time.month_num
    }

    /// Returns the English month name, e.g. `"March"`.
    pub fn month_name(&self) -> &str {
        &self.time.month_name
    }

    /// Returns the English weekday name, e.g. `"Tuesday"`.
    pub fn day_name(&self) -> &str {
        &self.time.day_name
    }

    /// Returns the hour bucket label, e.g. `"14-15"`.
    pub fn hour_period(&self) -> &str {
        &self.time.hour_period
    }

    // =========================================================================
    // Utility methods
    // =========================================================================

    /// Returns `true` for system-generated entries.
    pub fn is_notification(&self) -> bool {
        self.sender == GROUP_NOTIFICATION
    }

    /// Returns `true` if the body is the media placeholder.
    pub fn is_media(&self) -> bool {
        self.body.trim_end() == MEDIA_OMITTED
    }

    /// Rebuilds an Android-style export header for this message,
    /// e.g. `"01/01/2024, 10:00 - Alice: "`.
    ///
    /// Header plus [`body`](Self::body) parses back to an equivalent message
    /// with a parser using the same `order`.
    pub fn export_header(&self, order: DateOrder) -> String {
        let date = match order {
            DateOrder::DayFirst => self.timestamp.format("%d/%m/%Y"),
            DateOrder::MonthFirst => self.timestamp.format("%m/%d/%Y"),
        };
        let time = if self.timestamp.second() == 0 {
            self.timestamp.format("%H:%M")
        } else {
            self.timestamp.format("%H:%M:%S")
        };

        if self.is_notification() {
            format!("{date}, {time} - ")
        } else {
            format!("{date}, {time} - {}: ", self.sender)
        }
    }

    /// Appends a continuation line to the body.
    pub(crate) fn push_line(&mut self, line: &str) {
        self.body.push('\n');
        self.body.push_str(line);
    }

    /// Drops trailing blank lines and whitespace left by continuation lines.
    pub(crate) fn finalize_body(&mut self) {
        let trimmed = self.body.trim_end().len();
        self.body.truncate(trimmed);
    }
}
