//! Word frequency and word-cloud input.
//!
//! Both functions skip notifications and media placeholders, lowercase the
//! body and split it on whitespace. A word is dropped when it occurs
//! anywhere inside the stop-word text, so a short token like `"a"` is
//! dropped by any list that contains the letter `a`.

use std::fs;
use std::path::Path;

use super::frequency::FrequencyTable;
use super::selection::Selection;
use crate::Message;
use crate::error::Result;

/// A stop-word resource, loaded once and passed to the word functions.
///
/// Matching is plain substring containment against the whole text.
///
/// # Example
///
/// ```rust
/// use chatstat::analysis::StopWords;
///
/// let stop = StopWords::from_text("the\nand\nhai\n");
/// assert!(stop.contains("the"));
/// assert!(stop.contains("ha"));      // substring of "hai"
/// assert!(!stop.contains("rust"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    text: String,
}

impl StopWords {
    /// A list that excludes nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Reads the list from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::from_text(fs::read_to_string(path)?))
    }

    /// Returns `true` if `word` occurs anywhere in the list text.
    pub fn contains(&self, word: &str) -> bool {
        self.text.contains(word)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Lowercased words of the selected text messages that survive filtering.
fn filtered_words<'a>(
    messages: &'a [Message],
    selection: &'a Selection,
    stop_words: &'a StopWords,
) -> impl Iterator<Item = String> + 'a {
    selection
        .apply(messages)
        .filter(|m| !m.is_notification() && !m.is_media())
        .flat_map(|m| {
            m.body()
                .to_lowercase()
                .split_whitespace()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .filter(move |word| !stop_words.contains(word))
}

/// The `top_n` most frequent words.
pub fn most_common_words(
    messages: &[Message],
    selection: &Selection,
    stop_words: &StopWords,
    top_n: usize,
) -> FrequencyTable {
    FrequencyTable::from_labels(filtered_words(messages, selection, stop_words)).top(top_n)
}

/// All surviving words joined by single spaces, ready for a word-cloud renderer.
pub fn wordcloud_text(messages: &[Message], selection: &Selection, stop_words: &StopWords) -> String {
    filtered_words(messages, selection, stop_words)
        .collect::<Vec<_>>()
        .join(" ")
}
