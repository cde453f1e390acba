//! Property-based tests for chatstat.
//!
//! These tests generate random exports to find edge cases in the parser
//! and check invariants that every aggregation must keep.

use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::*;

use chatstat::prelude::*;

fn arb_timestamp() -> impl Strategy<Value = NaiveDateTime> {
    (2000i32..2100, 1u32..=12, 1u32..=28, 0u32..24, 0u32..60, 0u32..60).prop_map(
        |(y, m, d, h, min, s)| {
            NaiveDate::from_ymd_opt(y, m, d)
                .unwrap()
                .and_hms_opt(h, min, s)
                .unwrap()
        },
    )
}

/// Generate a random user message using fast strategies (no regex!)
fn arb_user_message() -> impl Strategy<Value = Message> {
    (
        arb_timestamp(),
        prop::sample::select(vec!["Alice", "Bob", "Charlie", "Иван", "User 42", "+1 555 0100"]),
        prop::sample::select(vec![
            "Hello",
            "Hi there!",
            "",
            "see https://example.com",
            "<Media omitted>",
            "😂😂 lol",
            "ratio: 3:1",
            "line one\nline two",
            "first\n\nafter blank",
            "Привет мир",
        ]),
    )
        .prop_map(|(ts, sender, body)| Message::new(ts, sender, body))
}

fn arb_notification() -> impl Strategy<Value = Message> {
    (
        arb_timestamp(),
        prop::sample::select(vec![
            "Alice added Bob",
            "Bob left",
            "Alice changed the subject to \"Weekend\"",
            "Messages and calls are end-to-end encrypted.",
        ]),
    )
        .prop_map(|(ts, body)| Message::notification(ts, body))
}

fn arb_message() -> impl Strategy<Value = Message> {
    prop_oneof![4 => arb_user_message(), 1 => arb_notification()]
}

fn arb_messages(max_len: usize) -> impl Strategy<Value = Vec<Message>> {
    prop::collection::vec(arb_message(), 1..max_len)
}

fn render(messages: &[Message]) -> String {
    messages
        .iter()
        .map(|m| format!("{}{}", m.export_header(DateOrder::DayFirst), m.body()))
        .collect::<Vec<_>>()
        .join("\n")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================
    // PARSER PROPERTIES
    // ============================================

    /// One record per header line; continuation lines never add records
    #[test]
    fn count_matches_header_lines(messages in arb_messages(30)) {
        let parsed = parse(&render(&messages)).unwrap();
        prop_assert_eq!(parsed.len(), messages.len());
    }

    /// Header plus body parses back to the same message
    #[test]
    fn header_round_trip(msg in arb_message()) {
        let parsed = parse(&render(std::slice::from_ref(&msg))).unwrap();
        prop_assert_eq!(parsed.len(), 1);
        prop_assert_eq!(&parsed[0], &msg);
    }

    /// Round trip also holds month-first
    #[test]
    fn header_round_trip_month_first(msg in arb_user_message()) {
        let text = format!("{}{}", msg.export_header(DateOrder::MonthFirst), msg.body());
        let parser = ChatParser::with_config(ParserConfig::new().with_date_order(DateOrder::MonthFirst));
        let parsed = parser.parse_str(&text).unwrap();
        prop_assert_eq!(&parsed[0], &msg);
    }

    /// Arbitrary text either parses or fails cleanly
    #[test]
    fn parse_never_panics(chars in prop::collection::vec(any::<char>(), 0..300)) {
        let text: String = chars.into_iter().collect();
        let _ = parse(&text);
    }

    // ============================================
    // AGGREGATION PROPERTIES
    // ============================================

    /// Same input, same output
    #[test]
    fn aggregations_are_idempotent(messages in arb_messages(30)) {
        let sel = Selection::Overall;
        prop_assert_eq!(fetch_stats(&messages, &sel), fetch_stats(&messages, &sel));
        prop_assert_eq!(most_busy_users(&messages, 5), most_busy_users(&messages, 5));
        prop_assert_eq!(activity_heatmap(&messages, &sel), activity_heatmap(&messages, &sel));
        prop_assert_eq!(
            emoji_frequency(&messages, &sel, &UnicodeEmoji),
            emoji_frequency(&messages, &sel, &UnicodeEmoji)
        );
    }

    /// Every grouping accounts for every selected message exactly once
    #[test]
    fn groupings_cover_selection(messages in arb_messages(30), user in prop::sample::select(vec!["Overall", "Alice", "Bob"])) {
        let sel = Selection::from_label(user);
        let total = fetch_stats(&messages, &sel).messages;

        let daily: usize = daily_timeline(&messages, &sel).iter().map(|d| d.count).sum();
        let monthly: usize = monthly_timeline(&messages, &sel).iter().map(|m| m.count).sum();
        prop_assert_eq!(daily, total);
        prop_assert_eq!(monthly, total);
        prop_assert_eq!(week_activity_map(&messages, &sel).total(), total);
        prop_assert_eq!(month_activity_map(&messages, &sel).total(), total);
        prop_assert_eq!(activity_heatmap(&messages, &sel).total(), total);
    }

    /// Timelines come out in chronological order
    #[test]
    fn timelines_are_sorted(messages in arb_messages(30)) {
        let daily = daily_timeline(&messages, &Selection::Overall);
        prop_assert!(daily.windows(2).all(|w| w[0].date < w[1].date));

        let monthly = monthly_timeline(&messages, &Selection::Overall);
        prop_assert!(monthly.windows(2).all(|w| (w[0].year, w[0].month_num) < (w[1].year, w[1].month_num)));
    }

    /// Frequency tables are sorted by count, descending
    #[test]
    fn frequency_tables_are_sorted(messages in arb_messages(30)) {
        let words = most_common_words(&messages, &Selection::Overall, &StopWords::empty(), 50);
        prop_assert!(words.rows().windows(2).all(|w| w[0].count >= w[1].count));
        prop_assert!(words.len() <= 50);

        let emojis = emoji_frequency(&messages, &Selection::Overall, &UnicodeEmoji);
        prop_assert!(emojis.rows().windows(2).all(|w| w[0].count >= w[1].count));
    }

    /// Media placeholders never show up as words
    #[test]
    fn media_never_counted_as_words(messages in arb_messages(30)) {
        let words = most_common_words(&messages, &Selection::Overall, &StopWords::empty(), usize::MAX);
        prop_assert_eq!(words.count("<media"), 0);
        prop_assert_eq!(words.count("omitted>"), 0);
    }

    /// Busy-user shares add up to 100% (within rounding)
    #[test]
    fn busy_shares_sum_to_hundred(messages in arb_messages(30)) {
        let busy = most_busy_users(&messages, 5);
        prop_assert!(busy.top.len() <= 5);
        prop_assert!(busy.shares.iter().all(|s| s.name != "group_notification"));
        if !busy.shares.is_empty() {
            let sum: f64 = busy.shares.iter().map(|s| s.percent).sum();
            prop_assert!((sum - 100.0).abs() <= 0.01 * busy.shares.len() as f64);
        }
    }
}
