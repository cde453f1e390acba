//! End-to-end CLI tests for chatstat.
//!
//! These tests verify the complete CLI workflow by running the actual binary
//! with various arguments and checking the output.
//!
//! # Test Categories
//!
//! - **Basic functionality**: text report, user selection, user listing
//! - **Output formats**: JSON and CSV, to stdout and to files
//! - **Flags**: date order, stop words, comparison, top-N
//! - **Error handling**: proper error messages for bad input
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

// ============================================================================
// Test Fixtures
// ============================================================================

/// Creates a temporary directory with export fixtures.
fn setup_fixtures() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");

    let android = "\
12/03/2024, 18:01 - Alice created group \"Rustaceans\"
12/03/2024, 18:05 - Alice: Welcome Bob! 🎉
12/03/2024, 18:06 - Bob: Thanks! Check https://www.rust-lang.org
12/03/2024, 18:07 - Bob: <Media omitted>
13/03/2024, 09:15 - Alice: the borrow checker
is my friend
13/03/2024, 09:20 - Carol: hi all 😀😀
";
    fs::write(dir.path().join("chat.txt"), android).unwrap();

    // Month-first: 1/15 only exists as January 15th
    let us = "\
1/15/24, 9:05 PM - Alice: evening
1/15/24, 9:06 PM - Bob: hello
";
    fs::write(dir.path().join("us.txt"), us).unwrap();

    let solo = "01/01/24, 10:00 - Alice: talking to myself\n";
    fs::write(dir.path().join("solo.txt"), solo).unwrap();

    fs::write(dir.path().join("notes.txt"), "no dates in here\n").unwrap();
    fs::write(dir.path().join("empty.txt"), "").unwrap();
    fs::write(dir.path().join("stop.txt"), "the\nis\nmy\n").unwrap();

    dir
}

fn chatstat_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::from_std(std::process::Command::new(env!("CARGO_BIN_EXE_chatstat")));
    // resolve the default stopwords.txt inside the fixture dir
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

fn output_path(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

// ============================================================================
// Basic Functionality Tests
// ============================================================================

mod basic_functionality {
    use super::*;

    #[test]
    fn test_text_report() {
        let fixtures = setup_fixtures();

        chatstat_cmd(&fixtures)
            .arg("chat.txt")
            .assert()
            .success()
            .stdout(predicate::str::contains("Top Statistics (Overall)"))
            .stdout(predicate::str::contains("Total Messages"))
            .stdout(predicate::str::contains("Most Busy Users"))
            .stdout(predicate::str::contains("March-2024"))
            .stdout(predicate::str::contains("😀"));
    }

    #[test]
    fn test_user_selection() {
        let fixtures = setup_fixtures();

        chatstat_cmd(&fixtures)
            .args(["chat.txt", "--user", "Bob"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Top Statistics (Bob)"))
            .stdout(predicate::str::contains("Most Busy Users").not());
    }

    #[test]
    fn test_list_users() {
        let fixtures = setup_fixtures();

        chatstat_cmd(&fixtures)
            .args(["chat.txt", "--list-users"])
            .assert()
            .success()
            .stdout("Overall\nAlice\nBob\nCarol\n");
    }

    #[test]
    fn test_missing_stopwords_warns() {
        let fixtures = setup_fixtures();

        chatstat_cmd(&fixtures)
            .arg("chat.txt")
            .assert()
            .success()
            .stderr(predicate::str::contains("stop-word list unavailable"));
    }
}

// ============================================================================
// Output Format Tests
// ============================================================================

mod output_formats {
    use super::*;

    #[test]
    fn test_csv_stdout() {
        let fixtures = setup_fixtures();

        chatstat_cmd(&fixtures)
            .args(["chat.txt", "--format", "csv", "--user", "Bob"])
            .assert()
            .success()
            .stdout("Metric,Count\nTotal Messages,2\nTotal Words,3\nMedia Shared,1\nLinks Shared,1\n");
    }

    #[test]
    fn test_csv_file() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "stats.csv");

        chatstat_cmd(&fixtures)
            .args(["chat.txt", "-f", "csv", "-o", output.to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::is_empty());

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.starts_with("Metric,Count\nTotal Messages,6\n"));
    }

    #[test]
    fn test_json_stdout() {
        let fixtures = setup_fixtures();

        let assert = chatstat_cmd(&fixtures)
            .args(["chat.txt", "--format", "json"])
            .assert()
            .success();

        let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
        assert_eq!(json["selection"], "Overall");
        assert_eq!(json["stats"]["messages"], 6);
        assert_eq!(json["busy_users"]["top"][0]["label"], "Alice");
        assert_eq!(json["emojis"][0]["label"], "😀");
    }

    #[test]
    fn test_json_file() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "report.json");

        chatstat_cmd(&fixtures)
            .args(["chat.txt", "--format", "json", "-o", output.to_str().unwrap()])
            .assert()
            .success();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(json["monthly_timeline"][0]["label"], "March-2024");
    }

    #[test]
    fn test_text_file() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "report.txt");

        chatstat_cmd(&fixtures)
            .args(["chat.txt", "-o", output.to_str().unwrap()])
            .assert()
            .success();

        assert!(fs::read_to_string(&output).unwrap().contains("Weekly Activity Map"));
    }
}

// ============================================================================
// Flag Tests
// ============================================================================

mod flags {
    use super::*;

    #[test]
    fn test_compare() {
        let fixtures = setup_fixtures();

        chatstat_cmd(&fixtures)
            .args(["chat.txt", "--compare", "Alice", "Bob"])
            .assert()
            .success()
            .stdout(predicate::str::contains("User Comparison"))
            .stdout(predicate::str::contains("Avg Words"));
    }

    #[test]
    fn test_compare_single_user_fails() {
        let fixtures = setup_fixtures();

        chatstat_cmd(&fixtures)
            .args(["solo.txt", "--compare", "Alice", "Bob"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Error:"))
            .stderr(predicate::str::contains("at least 2 users"));
    }

    #[test]
    fn test_date_order_month_first() {
        let fixtures = setup_fixtures();

        chatstat_cmd(&fixtures)
            .args(["us.txt", "--date-order", "month-first", "--format", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"2024-01-15\""))
            .stdout(predicate::str::contains("21-22"));
    }

    #[test]
    fn test_date_order_day_first_rejects_us_dates() {
        let fixtures = setup_fixtures();

        // 15 is not a month, so no line is a valid header
        chatstat_cmd(&fixtures)
            .arg("us.txt")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Cannot analyze this file"));
    }

    #[test]
    fn test_stopwords_and_top_words() {
        let fixtures = setup_fixtures();

        let assert = chatstat_cmd(&fixtures)
            .args([
                "chat.txt",
                "--user",
                "Alice",
                "--stopwords",
                "stop.txt",
                "--top-words",
                "2",
                "--format",
                "json",
            ])
            .assert()
            .success()
            .stderr(predicate::str::contains("stop-word list unavailable").not());

        let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
        let words = json["common_words"].as_array().unwrap();
        assert_eq!(words.len(), 2);
        assert!(words.iter().all(|w| w["label"] != "the" && w["label"] != "is"));
    }

    #[test]
    fn test_verbose_logs_load() {
        let fixtures = setup_fixtures();

        chatstat_cmd(&fixtures)
            .args(["chat.txt", "-v", "--list-users"])
            .assert()
            .success()
            .stderr(predicate::str::contains("loaded chat export"));
    }
}

// ============================================================================
// Error Handling Tests
// ============================================================================

mod error_handling {
    use super::*;

    #[test]
    fn test_missing_input() {
        let fixtures = setup_fixtures();

        chatstat_cmd(&fixtures)
            .arg("does_not_exist.txt")
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Error: IO error"));
    }

    #[test]
    fn test_not_a_chat() {
        let fixtures = setup_fixtures();

        chatstat_cmd(&fixtures)
            .arg("notes.txt")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Cannot analyze this file (notes.txt)"));
    }

    #[test]
    fn test_empty_file() {
        let fixtures = setup_fixtures();

        chatstat_cmd(&fixtures)
            .arg("empty.txt")
            .assert()
            .failure()
            .stderr(predicate::str::contains("input is empty"));
    }

    #[test]
    fn test_invalid_format() {
        let fixtures = setup_fixtures();

        chatstat_cmd(&fixtures)
            .args(["chat.txt", "--format", "xml"])
            .assert()
            .failure();
    }

    #[test]
    fn test_no_arguments() {
        let fixtures = setup_fixtures();

        chatstat_cmd(&fixtures)
            .assert()
            .failure()
            .stderr(predicate::str::contains("Usage"));
    }
}
