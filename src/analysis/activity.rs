//! Weekday, month and hour-of-week activity.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, Timelike};
use serde::Serialize;

use super::frequency::FrequencyTable;
use super::selection::Selection;
use crate::Message;
use crate::message::hour_period;

/// Messages per weekday name, busiest day first.
pub fn week_activity_map(messages: &[Message], selection: &Selection) -> FrequencyTable {
    FrequencyTable::from_labels(selection.apply(messages).map(Message::day_name))
}

/// Messages per month name (all years together), busiest month first.
pub fn month_activity_map(messages: &[Message], selection: &Selection) -> FrequencyTable {
    FrequencyTable::from_labels(selection.apply(messages).map(Message::month_name))
}

/// Weekday x hour-period message counts.
///
/// Only weekdays and hour periods that occur get a row or column. Rows run
/// Monday to Sunday; columns run from the earliest hour to the latest. A
/// combination with no messages holds 0.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Heatmap {
    pub days: Vec<String>,
    pub periods: Vec<String>,
    /// `counts[row][column]`, rows matching `days`, columns matching `periods`
    pub counts: Vec<Vec<usize>>,
}

impl Heatmap {
    /// Count for a weekday name and period label; 0 when either is absent.
    pub fn get(&self, day: &str, period: &str) -> usize {
        let row = self.days.iter().position(|d| d == day);
        let col = self.periods.iter().position(|p| p == period);
        match (row, col) {
            (Some(r), Some(c)) => self.counts[r][c],
            _ => 0,
        }
    }

    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Builds the weekly [`Heatmap`] for the selected messages.
pub fn activity_heatmap(messages: &[Message], selection: &Selection) -> Heatmap {
    let mut days: BTreeMap<u32, String> = BTreeMap::new();
    let mut hours: BTreeSet<u32> = BTreeSet::new();
    let mut cells: BTreeMap<(u32, u32), usize> = BTreeMap::new();

    for msg in selection.apply(messages) {
        let day = msg.timestamp().weekday().num_days_from_monday();
        let hour = msg.timestamp().hour();
        days.entry(day).or_insert_with(|| msg.day_name().to_string());
        hours.insert(hour);
        *cells.entry((day, hour)).or_insert(0) += 1;
    }

    let counts: Vec<Vec<usize>> = days
        .keys()
        .map(|day| {
            hours
                .iter()
                .map(|hour| cells.get(&(*day, *hour)).copied().unwrap_or(0))
                .collect()
        })
        .collect();

    Heatmap {
        days: days.into_values().collect(),
        periods: hours.into_iter().map(hour_period).collect(),
        counts,
    }
}
