//! Emoji usage.
//!
//! Which characters count as emoji is decided by an [`EmojiClassifier`].
//! [`UnicodeEmoji`] uses the Unicode emoji list; callers with other rules
//! can plug in their own classifier, or pass a closure.

use super::frequency::FrequencyTable;
use super::selection::Selection;
use crate::Message;

/// Decides whether a single character is an emoji.
pub trait EmojiClassifier {
    fn is_emoji(&self, c: char) -> bool;
}

impl<F> EmojiClassifier for F
where
    F: Fn(char) -> bool,
{
    fn is_emoji(&self, c: char) -> bool {
        self(c)
    }
}

/// Classifier backed by the Unicode emoji list shipped with the `emojis`
/// crate.
///
/// A character counts when it is an emoji on its own, either as is or in
/// its emoji presentation (followed by U+FE0F), so `©` and `▶` count while
/// plain symbols like `✓` or `★` do not. Skin-tone modifiers, hair
/// components, variation selectors and zero-width joiners are not emoji on
/// their own, so a composed sequence contributes each of its pictographs
/// separately. Regional indicators count one by one, which makes a flag two
/// emoji.
///
/// # Example
///
/// ```rust
/// use chatstat::analysis::{EmojiClassifier, UnicodeEmoji};
///
/// assert!(UnicodeEmoji.is_emoji('😂'));
/// assert!(UnicodeEmoji.is_emoji('❤'));
/// assert!(!UnicodeEmoji.is_emoji('a'));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeEmoji;

impl EmojiClassifier for UnicodeEmoji {
    fn is_emoji(&self, c: char) -> bool {
        match c {
            '\u{1F1E6}'..='\u{1F1FF}' => true,
            // skin tones and hair styles
            '\u{1F3FB}'..='\u{1F3FF}' | '\u{1F9B0}'..='\u{1F9B3}' => false,
            _ => {
                let mut buf = [0u8; 4];
                emojis::get(c.encode_utf8(&mut buf)).is_some()
                    || emojis::get(&format!("{c}\u{FE0F}")).is_some()
            }
        }
    }
}

/// Number of emoji characters in `text`.
pub fn count_emojis(text: &str, classifier: &dyn EmojiClassifier) -> usize {
    text.chars().filter(|c| classifier.is_emoji(*c)).count()
}

/// Emoji occurrences across the selected messages, most used first.
pub fn emoji_frequency(
    messages: &[Message],
    selection: &Selection,
    classifier: &dyn EmojiClassifier,
) -> FrequencyTable {
    FrequencyTable::from_labels(
        selection
            .apply(messages)
            .flat_map(|m| m.body().chars())
            .filter(|c| classifier.is_emoji(*c))
            .map(String::from),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn msg(sender: &str, body: &str) -> Message {
        let ts = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        Message::new(ts, sender, body)
    }

    #[test]
    fn test_unicode_classifier() {
        for c in ['😀', '🚀', '🤖', '🥲', '☀', '✅', '🇮', '⭐', '❤', '✔'] {
            assert!(UnicodeEmoji.is_emoji(c), "{c} should be an emoji");
        }
        for c in ['©', '®', '™', '‼', '▶', '↔', '◻', 'ℹ', '🅰', '🈯'] {
            assert!(UnicodeEmoji.is_emoji(c), "{c} should be an emoji");
        }
        for c in ['✓', '★', '☐', '❶', '#', '*'] {
            assert!(!UnicodeEmoji.is_emoji(c), "{c} should not be an emoji");
        }
        for c in ['a', '1', ' ', '€', 'é', '\u{FE0F}', '\u{200D}', '\u{1F3FD}'] {
            assert!(!UnicodeEmoji.is_emoji(c), "{c:?} should not be an emoji");
        }
    }

    #[test]
    fn test_emoji_frequency() {
        let messages = vec![
            msg("Alice", "😂😂 so funny 👍"),
            msg("Bob", "👍"),
            msg("Bob", "😂"),
            msg("Bob", "no emoji here"),
        ];
        let table = emoji_frequency(&messages, &Selection::Overall, &UnicodeEmoji);
        assert_eq!(table.labels(), vec!["😂", "👍"]);
        assert_eq!(table.count("😂"), 3);
        assert_eq!(table.count("👍"), 2);

        let bob = emoji_frequency(&messages, &Selection::user("Bob"), &UnicodeEmoji);
        assert_eq!(bob.total(), 2);
    }

    #[test]
    fn test_skin_tone_sequence_counts_base_only() {
        let messages = vec![msg("Alice", "👍\u{1F3FD}")];
        let table = emoji_frequency(&messages, &Selection::Overall, &UnicodeEmoji);
        assert_eq!(table.labels(), vec!["👍"]);
    }

    #[test]
    fn test_closure_classifier() {
        let only_x = |c: char| c == 'x';
        assert_eq!(count_emojis("xax😂x", &only_x), 3);
        assert_eq!(count_emojis("plain", &UnicodeEmoji), 0);
    }

    #[test]
    fn test_no_emojis_is_empty() {
        let messages = vec![msg("Alice", "hello")];
        assert!(emoji_frequency(&messages, &Selection::Overall, &UnicodeEmoji).is_empty());
    }
}
