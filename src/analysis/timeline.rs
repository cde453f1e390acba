//! Message counts over time.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use super::selection::Selection;
use crate::Message;

/// Messages sent in one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyCount {
    pub year: i32,
    pub month_num: u32,
    pub month_name: String,
    /// `"<month_name>-<year>"`, e.g. `"January-2024"`
    pub label: String,
    pub count: usize,
}

/// Messages sent on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: usize,
}

/// Counts messages per month, oldest month first.
///
/// Months without messages are not listed.
pub fn monthly_timeline(messages: &[Message], selection: &Selection) -> Vec<MonthlyCount> {
    let mut months: BTreeMap<(i32, u32), MonthlyCount> = BTreeMap::new();

    for msg in selection.apply(messages) {
        months
            .entry((msg.year(), msg.month_num()))
            .or_insert_with(|| MonthlyCount {
                year: msg.year(),
                month_num: msg.month_num(),
                month_name: msg.month_name().to_string(),
                label: format!("{}-{}", msg.month_name(), msg.year()),
                count: 0,
            })
            .count += 1;
    }

    months.into_values().collect()
}

/// Counts messages per day, oldest day first.
pub fn daily_timeline(messages: &[Message], selection: &Selection) -> Vec<DailyCount> {
    let mut days: BTreeMap<NaiveDate, usize> = BTreeMap::new();

    for msg in selection.apply(messages) {
        *days.entry(msg.date_only()).or_insert(0) += 1;
    }

    days.into_iter()
        .map(|(date, count)| DailyCount { date, count })
        .collect()
}
