//! Top-line metrics: messages, words, media and links.

use serde::Serialize;

use super::links::count_links;
use super::selection::Selection;
use crate::Message;

/// The four headline numbers for a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TopStats {
    /// Number of selected messages, notifications and media included
    pub messages: usize,
    /// Whitespace-separated words across bodies (media placeholders excluded)
    pub words: usize,
    /// Messages whose body is the media placeholder
    pub media: usize,
    /// URLs found across bodies
    pub links: usize,
}

impl TopStats {
    /// Returns `(label, value)` pairs in report order.
    pub fn metrics(&self) -> [(&'static str, usize); 4] {
        [
            ("Total Messages", self.messages),
            ("Total Words", self.words),
            ("Media Shared", self.media),
            ("Links Shared", self.links),
        ]
    }
}

/// Number of words a message contributes to word totals.
///
/// Media placeholders carry no words of their own.
pub fn word_count(msg: &Message) -> usize {
    if msg.is_media() {
        0
    } else {
        msg.body().split_whitespace().count()
    }
}

/// Computes [`TopStats`] for the selected messages.
///
/// # Example
///
/// ```rust
/// use chatstat::analysis::{Selection, fetch_stats};
/// use chatstat::parser::parse;
///
/// let messages = parse("01/01/24, 10:00 - Alice: hello\n01/01/24, 10:05 - Bob: <Media omitted>\n")?;
/// let stats = fetch_stats(&messages, &Selection::Overall);
/// assert_eq!((stats.messages, stats.words, stats.media, stats.links), (2, 1, 1, 0));
/// # Ok::<(), chatstat::ChatstatError>(())
/// ```
pub fn fetch_stats(messages: &[Message], selection: &Selection) -> TopStats {
    selection
        .apply(messages)
        .fold(TopStats::default(), |mut stats, msg| {
            stats.messages += 1;
            stats.words += word_count(msg);
            stats.media += usize::from(msg.is_media());
            stats.links += count_links(msg.body());
            stats
        })
}
