//! Configuration types for parsing and analysis.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`ParserConfig`] - how export lines are interpreted
//! - [`AnalysisConfig`] - table sizes and the stop-word resource location
//!
//! # Example
//!
//! ```rust
//! use chatstat::config::{DateOrder, ParserConfig};
//! use chatstat::parser::ChatParser;
//!
//! let config = ParserConfig::new()
//!     .with_date_order(DateOrder::MonthFirst)
//!     .with_max_sender_len(40);
//!
//! let parser = ChatParser::with_config(config);
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Order of the day and month fields in the export's date token.
///
/// A bare `01/02/24` cannot tell the two apart, so the order is a fixed
/// setting for the whole file rather than something guessed per line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateOrder {
    /// `DD/MM/YY` (most non-US locales)
    #[default]
    DayFirst,
    /// `MM/DD/YY` (US locale)
    MonthFirst,
}

/// Date order used when none is configured.
pub const DEFAULT_DATE_ORDER: DateOrder = DateOrder::DayFirst;

/// Longest left-hand token (in characters) still accepted as a sender name.
pub const DEFAULT_MAX_SENDER_LEN: usize = 64;

/// Stop-word file read when no other path is given.
pub const DEFAULT_STOPWORDS_PATH: &str = "stopwords.txt";

impl std::fmt::Display for DateOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateOrder::DayFirst => write!(f, "day-first"),
            DateOrder::MonthFirst => write!(f, "month-first"),
        }
    }
}

impl std::str::FromStr for DateOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "day-first" | "dmy" | "dd/mm" => Ok(DateOrder::DayFirst),
            "month-first" | "mdy" | "mm/dd" => Ok(DateOrder::MonthFirst),
            _ => Err(format!(
                "Unknown date order: '{}'. Expected one of: day-first, month-first",
                s
            )),
        }
    }
}

/// Configuration for export parsing.
///
/// # Example
///
/// ```rust
/// use chatstat::config::{DateOrder, ParserConfig};
///
/// let config = ParserConfig::default();
/// assert_eq!(config.date_order, DateOrder::DayFirst);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Day/month order of the date token (default: [`DEFAULT_DATE_ORDER`])
    pub date_order: DateOrder,

    /// Maximum sender name length in characters (default: 64)
    pub max_sender_len: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            date_order: DEFAULT_DATE_ORDER,
            max_sender_len: DEFAULT_MAX_SENDER_LEN,
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the date order.
    #[must_use]
    pub fn with_date_order(mut self, order: DateOrder) -> Self {
        self.date_order = order;
        self
    }

    /// Sets the maximum sender name length.
    #[must_use]
    pub fn with_max_sender_len(mut self, len: usize) -> Self {
        self.max_sender_len = len;
        self
    }
}

/// Configuration for the aggregation stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Rows kept in the most-common-words table (default: 20)
    pub top_words: usize,

    /// Rows kept in the busiest-users table (default: 5)
    pub top_users: usize,

    /// Location of the stop-word resource (default: `stopwords.txt`)
    pub stopwords_path: PathBuf,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_words: 20,
            top_users: 5,
            stopwords_path: PathBuf::from(DEFAULT_STOPWORDS_PATH),
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of rows in the most-common-words table.
    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }

    /// Sets the number of rows in the busiest-users table.
    #[must_use]
    pub fn with_top_users(mut self, n: usize) -> Self {
        self.top_users = n;
        self
    }

    /// Sets the stop-word file location.
    #[must_use]
    pub fn with_stopwords_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.stopwords_path = path.into();
        self
    }
}
