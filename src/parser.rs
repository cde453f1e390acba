//! WhatsApp TXT export parser.
//!
//! Turns the raw text of one "Export chat" file into an ordered
//! `Vec<Message>`. A line that starts with a date/time header opens a new
//! message; every other line continues the body of the open message.
//!
//! Supported header shapes:
//! - Android: `15/01/24, 10:30 - Sender: Message`
//! - Android 12h: `1/15/24, 10:30 pm - Sender: Message`
//! - iOS: `[15/01/2024, 10:30:45] Sender: Message`
//! - iOS 12h: `[1/15/24, 10:30:45 AM] Sender: Message`
//!
//! Date separators `/`, `.` and `-` are accepted with 2- or 4-digit years.
//! Whether `01/02/24` is the 1st of February or the 2nd of January is decided
//! by [`ParserConfig::date_order`], never per line.
//!
//! # Example
//!
//! ```rust
//! use chatstat::parser::parse;
//!
//! let messages = parse("01/01/24, 10:00 - Alice: hello\n01/01/24, 10:05 - Bob: hi\n")?;
//! assert_eq!(messages.len(), 2);
//! assert_eq!(messages[1].sender(), "Bob");
//! # Ok::<(), chatstat::ChatstatError>(())
//! ```

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::{Captures, Regex};
use tracing::debug;

use crate::Message;
use crate::config::{DateOrder, ParserConfig};
use crate::error::{ChatstatError, Result};

const DATE: &str = r"\d{1,2}[/.\-]\d{1,2}[/.\-]\d{2,4}";
const TIME: &str = r"\d{1,2}:\d{2}(?::\d{2})?(?:[\s\x{202F}\x{00A0}]?[AaPp]\.?\s?[Mm]\.?)?";

/// Dated-message prefix, either bracketed (iOS) or dash-separated (Android).
static HEADER: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"^(?:\[(?P<bdate>{DATE}),?\s(?P<btime>{TIME})\]\s?|(?P<date>{DATE}),?\s(?P<time>{TIME})\s[-\x{{2013}}](?:\s|$))(?P<rest>.*)$"
    );
    Regex::new(&pattern).unwrap()
});

const TIME_FORMATS_24H: &[&str] = &["%H:%M:%S", "%H:%M"];
const TIME_FORMATS_12H: &[&str] = &["%I:%M:%S %p", "%I:%M %p"];

/// System notices that embed user-written text, which may itself contain
/// `": "`. Bare-verb notices ("Bob left", "Alice added Bob") have no colon
/// and never reach the sender check.
const QUOTED_TEXT_NOTICES: &[&str] = &[
    "messages and calls are end-to-end encrypted",
    "created group",
    "changed the subject",
    "changed the group name",
    "changed the group description",
    "changed the description",
];

/// Quote characters WhatsApp wraps group names and subjects in.
const QUOTES: &[char] = &['"', '\u{201C}', '\u{201D}'];

/// Parser for WhatsApp TXT exports.
///
/// # Example
///
/// ```rust
/// use chatstat::config::{DateOrder, ParserConfig};
/// use chatstat::parser::ChatParser;
///
/// let parser = ChatParser::with_config(ParserConfig::new().with_date_order(DateOrder::MonthFirst));
/// let messages = parser.parse_str("1/15/24, 9:05 pm - Alice: hi")?;
/// assert_eq!(messages[0].hour_period(), "21-22");
/// # Ok::<(), chatstat::ChatstatError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ChatParser {
    config: ParserConfig,
}

impl ChatParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Reads and parses an export file.
    pub fn parse_file(&self, path: &Path) -> Result<Vec<Message>> {
        let bytes = fs::read(path)?;
        self.parse_bytes(&bytes).map_err(|e| e.with_path(path))
    }

    /// Parses an export supplied as raw bytes (must be UTF-8).
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<Vec<Message>> {
        let content = String::from_utf8(bytes.to_vec())?;
        self.parse_str(&content)
    }

    /// Parses the full decoded text of one export.
    ///
    /// Fails only if the text is empty or no line carries a date/time
    /// header. Unrecognized lines never fail; they are appended to the
    /// previous message, or dropped if no message has started yet.
    pub fn parse_str(&self, content: &str) -> Result<Vec<Message>> {
        if content.trim().is_empty() {
            return Err(ChatstatError::empty_input(None));
        }

        let mut messages: Vec<Message> = Vec::new();
        let mut open: Option<Message> = None;
        let mut scanned = 0usize;

        for (idx, line) in content.lines().enumerate() {
            scanned += 1;

            if let Some(msg) = self.parse_header(strip_marks(line), idx + 1) {
                if let Some(mut prev) = open.replace(msg) {
                    prev.finalize_body();
                    messages.push(prev);
                }
            } else if let Some(current) = open.as_mut() {
                current.push_line(line);
            } else {
                debug!(line = idx + 1, "dropping content before first message");
            }
        }

        if let Some(mut last) = open {
            last.finalize_body();
            messages.push(last);
        }

        if messages.is_empty() {
            return Err(ChatstatError::no_timestamped_lines(scanned, None));
        }

        debug!(messages = messages.len(), lines = scanned, "parsed export");
        Ok(messages)
    }

    /// Builds a message from a header line, or `None` for continuation lines.
    fn parse_header(&self, line: &str, line_no: usize) -> Option<Message> {
        let caps = HEADER.captures(line)?;
        let (date, time) = header_tokens(&caps)?;

        let Some(timestamp) = parse_timestamp(date, time, self.config.date_order) else {
            debug!(line = line_no, date, time, "header has no valid date, treating as continuation");
            return None;
        };

        let rest = caps.name("rest").map_or("", |m| m.as_str());
        Some(match self.split_sender(rest) {
            Some((sender, body)) => Message::new(timestamp, sender, body),
            None => Message::notification(timestamp, rest.trim()),
        })
    }

    /// Splits `Sender: body`. Returns `None` when the remainder is a notification.
    fn split_sender<'a>(&self, rest: &'a str) -> Option<(&'a str, &'a str)> {
        let (left, body) = match rest.split_once(": ") {
            Some(split) => split,
            None => (rest.trim_end().strip_suffix(':')?, ""),
        };

        let sender = left.trim();
        if sender.is_empty()
            || sender.chars().count() > self.config.max_sender_len
            || sender.contains(QUOTES)
            || is_quoted_text_notice(sender)
        {
            return None;
        }

        Some((sender, body))
    }
}

/// Parses an export with the default configuration.
///
/// Shorthand for `ChatParser::new().parse_str(raw_text)`.
pub fn parse(raw_text: &str) -> Result<Vec<Message>> {
    ChatParser::new().parse_str(raw_text)
}

/// Removes the byte-order and direction marks WhatsApp puts in front of lines.
fn strip_marks(line: &str) -> &str {
    line.trim_start_matches(['\u{feff}', '\u{200e}', '\u{200f}'])
}

fn header_tokens<'a>(caps: &Captures<'a>) -> Option<(&'a str, &'a str)> {
    let date = caps.name("date").or_else(|| caps.name("bdate"))?;
    let time = caps.name("time").or_else(|| caps.name("btime"))?;
    Some((date.as_str(), time.as_str()))
}

fn is_quoted_text_notice(token: &str) -> bool {
    let padded = format!(" {} ", token.to_lowercase());
    QUOTED_TEXT_NOTICES
        .iter()
        .any(|phrase| padded.contains(&format!(" {phrase} ")))
}

/// Parses a header's date and time tokens into a naive timestamp.
fn parse_timestamp(date: &str, time: &str, order: DateOrder) -> Option<NaiveDateTime> {
    let date = parse_date(date, order)?;
    let time = parse_time(time)?;
    Some(date.and_time(time))
}

fn parse_date(token: &str, order: DateOrder) -> Option<NaiveDate> {
    let mut parts = token.split(['/', '.', '-']).map(str::parse::<u32>);
    let (first, second, year) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(Ok(a)), Some(Ok(b)), Some(Ok(y)), None) => (a, b, y),
        _ => return None,
    };

    let (day, month) = match order {
        DateOrder::DayFirst => (first, second),
        DateOrder::MonthFirst => (second, first),
    };
    let year = if year < 100 { 2000 + year } else { year };

    NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)
}

fn parse_time(token: &str) -> Option<NaiveTime> {
    let compact: String = token
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '.')
        .collect::<String>()
        .to_ascii_uppercase();

    let (clock, meridiem) = match compact.strip_suffix("AM") {
        Some(clock) => (clock, Some("AM")),
        None => match compact.strip_suffix("PM") {
            Some(clock) => (clock, Some("PM")),
            None => (compact.as_str(), None),
        },
    };

    match meridiem {
        Some(m) => {
            let normalized = format!("{clock} {m}");
            TIME_FORMATS_12H
                .iter()
                .find_map(|fmt| NaiveTime::parse_from_str(&normalized, fmt).ok())
        }
        None => TIME_FORMATS_24H
            .iter()
            .find_map(|fmt| NaiveTime::parse_from_str(clock, fmt).ok()),
    }
}
