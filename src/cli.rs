//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - how the report is emitted

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::analysis::Selection;
use crate::config::{AnalysisConfig, DEFAULT_STOPWORDS_PATH, DateOrder, ParserConfig};

/// Analyze a WhatsApp chat export: activity over time, busiest users,
/// common words, emoji and user comparisons.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstat")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstat chat.txt
    chatstat chat.txt --user Alice
    chatstat chat.txt --compare Alice Bob
    chatstat chat.txt --format json -o report.json
    chatstat chat.txt --format csv -o stats.csv
    chatstat us_chat.txt --date-order month-first
    chatstat chat.txt --list-users")]
pub struct Args {
    /// Path to the exported chat (.txt)
    pub input: PathBuf,

    /// Restrict the analysis to one sender ("Overall" for everyone)
    #[arg(short, long, value_name = "NAME")]
    pub user: Option<String>,

    /// Compare two senders side by side
    #[arg(long, num_args = 2, value_names = ["USER1", "USER2"])]
    pub compare: Option<Vec<String>>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write the output to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Stop-word list; a missing file means no stop words
    #[arg(long, value_name = "PATH", default_value = DEFAULT_STOPWORDS_PATH)]
    pub stopwords: PathBuf,

    /// Order of day and month in the export's dates
    #[arg(long, value_name = "ORDER", default_value = "day-first")]
    pub date_order: DateOrder,

    /// Number of words in the common-words table
    #[arg(long, value_name = "N", default_value_t = 20)]
    pub top_words: usize,

    /// Number of users in the busy-users table
    #[arg(long, value_name = "N", default_value_t = 5)]
    pub top_users: usize,

    /// Print the selectable users and exit
    #[arg(long)]
    pub list_users: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn selection(&self) -> Selection {
        self.user
            .as_deref()
            .map_or(Selection::Overall, Selection::from_label)
    }

    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig::new().with_date_order(self.date_order)
    }

    pub fn analysis_config(&self) -> AnalysisConfig {
        AnalysisConfig::new()
            .with_top_words(self.top_words)
            .with_top_users(self.top_users)
            .with_stopwords_path(self.stopwords.clone())
    }

    /// The two users given to `--compare`, if any.
    pub fn compare_pair(&self) -> Option<(&str, &str)> {
        match self.compare.as_deref() {
            Some([a, b]) => Some((a.as_str(), b.as_str())),
            _ => None,
        }
    }
}

/// Output format options.
///
/// - [`Text`](OutputFormat::Text) - aligned tables for a terminal
/// - [`Json`](OutputFormat::Json) - the full report
/// - [`Csv`](OutputFormat::Csv) - the four headline metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "Text"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Csv => write!(f, "CSV"),
        }
    }
}
