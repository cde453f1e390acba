//! Side-by-side comparison of two senders.

use serde::Serialize;

use super::emoji::{EmojiClassifier, count_emojis};
use super::links::count_links;
use super::stats::word_count;
use super::users::{distinct_users, round2};
use crate::Message;
use crate::error::{ChatstatError, Result};

/// One user's figures in a comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserComparison {
    pub user: String,
    pub messages: usize,
    /// Words per message, rounded to 2 decimals
    pub avg_words: f64,
    pub media: usize,
    pub links: usize,
    pub emojis: usize,
}

impl UserComparison {
    fn for_user(messages: &[Message], user: &str, classifier: &dyn EmojiClassifier) -> Self {
        let mut row = UserComparison {
            user: user.to_string(),
            messages: 0,
            avg_words: 0.0,
            media: 0,
            links: 0,
            emojis: 0,
        };
        let mut words = 0;

        for msg in messages.iter().filter(|m| m.sender() == user) {
            row.messages += 1;
            words += word_count(msg);
            row.media += usize::from(msg.is_media());
            row.links += count_links(msg.body());
            row.emojis += count_emojis(msg.body(), classifier);
        }

        if row.messages > 0 {
            row.avg_words = round2(words as f64 / row.messages as f64);
        }
        row
    }
}

/// Compares two senders, one row each, in argument order.
///
/// # Errors
///
/// Returns [`ChatstatError::InsufficientUsers`] if the chat has fewer than
/// two human senders. A name that never appears gets a zero row.
pub fn compare_users(
    messages: &[Message],
    user1: &str,
    user2: &str,
    classifier: &dyn EmojiClassifier,
) -> Result<Vec<UserComparison>> {
    let found = distinct_users(messages).len();
    if found < 2 {
        return Err(ChatstatError::insufficient_users(found));
    }

    Ok(vec![
        UserComparison::for_user(messages, user1, classifier),
        UserComparison::for_user(messages, user2, classifier),
    ])
}
