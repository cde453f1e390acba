//! Per-user rankings and the user picker list.

use std::collections::BTreeSet;

use serde::Serialize;

use super::frequency::FrequencyTable;
use super::selection::OVERALL;
use crate::Message;

/// A sender's share of all human messages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserShare {
    pub name: String,
    /// Percentage of human messages, rounded to 2 decimals
    pub percent: f64,
}

/// Result of [`most_busy_users`].
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct BusyUsers {
    /// The busiest senders with their message counts
    pub top: FrequencyTable,
    /// Every sender with their share, busiest first
    pub shares: Vec<UserShare>,
}

/// Ranks senders by message count.
///
/// Notifications are not a user and are left out of both the counts and the
/// percentage base.
pub fn most_busy_users(messages: &[Message], top_n: usize) -> BusyUsers {
    let counts = FrequencyTable::from_labels(
        messages
            .iter()
            .filter(|m| !m.is_notification())
            .map(Message::sender),
    );
    let total = counts.total();

    let shares = counts
        .iter()
        .map(|row| UserShare {
            name: row.label.clone(),
            percent: round2(row.count as f64 / total as f64 * 100.0),
        })
        .collect();

    BusyUsers {
        top: counts.top(top_n),
        shares,
    }
}

/// Distinct human senders, sorted.
pub fn distinct_users(messages: &[Message]) -> Vec<&str> {
    messages
        .iter()
        .filter(|m| !m.is_notification())
        .map(Message::sender)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Options for a user picker: [`OVERALL`] followed by every sender, sorted.
pub fn user_list(messages: &[Message]) -> Vec<String> {
    std::iter::once(OVERALL)
        .chain(distinct_users(messages))
        .map(str::to_string)
        .collect()
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
