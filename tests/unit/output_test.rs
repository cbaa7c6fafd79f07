//! Tests for the Output module
//!
//! Reports render either as the operator-facing text or as JSON.

use raffle_checker::core::models::{Ticket, WinningSet};
use raffle_checker::core::services::find_matches;
use raffle_checker::output::{CheckReport, OutputMode, WinningNumbersReport};

use crate::common::sample_winning_set;

fn render_to_string(render: impl FnOnce(&mut Vec<u8>) -> std::io::Result<()>) -> String {
    colored::control::set_override(false);
    let mut out = Vec::new();
    render(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn check_report(values: &[&str], set: &WinningSet) -> CheckReport {
    let tickets: Vec<Ticket> = values.iter().map(|v| Ticket::parse(v).unwrap()).collect();
    let matches = find_matches(&tickets, set);
    CheckReport::new(&tickets, &matches)
}

// =============================================================================
// OutputMode Tests
// =============================================================================

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

// =============================================================================
// WinningNumbersReport
// =============================================================================

#[test]
fn winning_numbers_are_listed_oldest_first() {
    let report = WinningNumbersReport::from_set(&sample_winning_set());

    let text = render_to_string(|out| report.render(OutputMode::Human, out));

    assert_eq!(
        text,
        "The winning numbers are:\n\
         Jan 03, 2026  --|--> 123\n\
         Jan 10, 2026  --|--> 71422\n\
         Jan 17, 2026  --|--> 059\n"
    );
}

#[test]
fn empty_winning_set_prints_only_the_header() {
    let report = WinningNumbersReport::from_set(&WinningSet::new());

    let text = render_to_string(|out| report.render(OutputMode::Human, out));

    assert_eq!(text, "The winning numbers are:\n");
}

#[test]
fn winning_numbers_json() {
    let report = WinningNumbersReport::from_set(&sample_winning_set());

    let text = render_to_string(|out| report.render(OutputMode::Json, out));
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();

    let draws = json["draws"].as_array().unwrap();
    assert_eq!(draws.len(), 3);
    assert_eq!(draws[0]["date_key"], "2026-01-03T19:29:00-05:00");
    assert_eq!(draws[0]["date"], "Jan 03, 2026");
    assert_eq!(draws[0]["sequence"], 3);
    assert_eq!(draws[1]["numbers"], serde_json::json!([7, 14, 22]));
    assert_eq!(draws[1]["combination"], "71422");
}

// =============================================================================
// CheckReport
// =============================================================================

#[test]
fn no_winners_message() {
    let report = check_report(&[], &WinningSet::new());

    let text = render_to_string(|out| report.render(OutputMode::Human, out));

    assert!(!report.won);
    assert!(text.contains("¯\\_(ツ)_/¯"));
    assert!(text.contains("~~~You have no winning numbers!~~~"));
    assert!(!text.contains("Congratulations"));
}

#[test]
fn single_winner_banner() {
    let report = check_report(&["123", "456"], &sample_winning_set());

    let text = render_to_string(|out| report.render(OutputMode::Human, out));

    assert!(report.won);
    assert!(text.contains("~~~~~Congratulations!~~~~~"));
    assert!(text.contains("\t[!] Your ticket #123 won on Jan 03, 2026!\n"));
    assert!(!text.contains("Wowsers"));
}

#[test]
fn multiple_winners_banner_is_pluralized() {
    let report = check_report(&["059", "123"], &sample_winning_set());

    let text = render_to_string(|out| report.render(OutputMode::Human, out));

    let wowsers = text.find("Wowsers, you won multiple times!!").unwrap();
    let congrats = text.find("Congratulations!").unwrap();
    let first = text.find("#123 won on Jan 03, 2026!").unwrap();
    let second = text.find("#059 won on Jan 17, 2026!").unwrap();
    assert!(wowsers < congrats && congrats < first && first < second);
}

#[test]
fn check_report_json() {
    let report = check_report(&["059", "777"], &sample_winning_set());

    let text = render_to_string(|out| report.render(OutputMode::Json, out));
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(json["won"], true);
    assert_eq!(json["tickets"], serde_json::json!(["059", "777"]));
    assert_eq!(json["matches"][0]["ticket"], "059");
    assert_eq!(json["matches"][0]["date"], "Jan 17, 2026");
}
