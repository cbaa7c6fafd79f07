//! Tests for ticket matching
//!
//! Winning numbers are concatenated without zero padding before comparison,
//! so draws containing a two-digit number can never be won.

use chrono::DateTime;
use raffle_checker::core::models::{Ticket, WinningCombination, WinningDraw, WinningSet};
use raffle_checker::core::services::find_matches;
use test_case::test_case;

use crate::common::sample_winning_set;

fn tickets(values: &[&str]) -> Vec<Ticket> {
    values.iter().map(|v| Ticket::parse(v).unwrap()).collect()
}

fn winning_draw(date: &str, numbers: [u32; 3]) -> WinningDraw {
    WinningDraw {
        drawn_at: DateTime::parse_from_rfc3339(date).unwrap(),
        sequence: 1,
        combination: WinningCombination::new(numbers),
    }
}

#[test_case([1, 2, 3], "123" ; "single digits")]
#[test_case([0, 5, 9], "059" ; "leading zero number")]
#[test_case([0, 0, 0], "000" ; "all zeros")]
#[test_case([7, 14, 22], "71422" ; "two digit numbers are not padded or truncated")]
#[test_case([10, 2, 3], "1023" ; "one two digit number")]
fn concatenation(numbers: [u32; 3], expected: &str) {
    assert_eq!(WinningCombination::new(numbers).concatenated(), expected);
}

#[test]
fn from_slice_requires_three_numbers() {
    assert!(WinningCombination::from_slice(&[1, 2]).is_none());
    assert!(WinningCombination::from_slice(&[1, 2, 3, 4]).is_none());
    assert_eq!(
        WinningCombination::from_slice(&[4, 5, 6]),
        Some(WinningCombination::new([4, 5, 6]))
    );
}

#[test]
fn no_tickets_no_draws_no_matches() {
    assert!(find_matches(&[], &WinningSet::new()).is_empty());
}

#[test]
fn single_match_is_keyed_by_draw_date() {
    let set = sample_winning_set();

    let matches = find_matches(&tickets(&["123", "456"]), &set);

    assert_eq!(matches.len(), 1);
    let m = &matches["2026-01-03T19:29:00-05:00"];
    assert_eq!(m.ticket.as_str(), "123");
    assert_eq!(m.draw.display_date(), "Jan 03, 2026");
}

#[test]
fn wednesday_combination_is_not_in_play() {
    // 2026-01-07 (Wednesday) also drew 1-2-3 but was filtered out.
    let set = sample_winning_set();

    let matches = find_matches(&tickets(&["123"]), &set);

    assert!(!matches.contains_key("2026-01-07T19:29:00-05:00"));
}

#[test]
fn leading_zero_ticket_matches_leading_zero_draw() {
    let set = sample_winning_set();

    let matches = find_matches(&tickets(&["059"]), &set);

    assert_eq!(matches.len(), 1);
    assert!(matches.contains_key("2026-01-17T19:29:00-05:00"));
}

#[test]
fn two_digit_draw_is_unmatchable() {
    let set = sample_winning_set();

    // Every 3-digit ticket; none can equal "71422".
    let all: Vec<Ticket> = (0..1000).map(|n| Ticket::parse(&format!("{n:03}")).unwrap()).collect();
    let matches = find_matches(&all, &set);

    assert!(!matches.contains_key("2026-01-10T19:29:00-05:00"));
    assert_eq!(matches.len(), 2);
}

#[test]
fn one_ticket_can_win_several_draws() {
    let mut set = WinningSet::new();
    set.insert("2026-03-07T19:29:00-05:00", winning_draw("2026-03-07T19:29:00-05:00", [3, 3, 3]));
    set.insert("2026-03-14T19:29:00-05:00", winning_draw("2026-03-14T19:29:00-05:00", [3, 3, 3]));

    let matches = find_matches(&tickets(&["333"]), &set);

    assert_eq!(matches.len(), 2);
    assert!(matches.values().all(|m| m.ticket.as_str() == "333"));
}

#[test]
fn duplicate_tickets_yield_one_match_per_draw() {
    let set = sample_winning_set();

    let matches = find_matches(&tickets(&["123", "123"]), &set);

    assert_eq!(matches.len(), 1);
}
