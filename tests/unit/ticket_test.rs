//! Tests for ticket validation
//!
//! A ticket is accepted iff it matches `^[0-9]{3}$`.

use raffle_checker::core::models::{Ticket, TicketError};
use test_case::test_case;

#[test_case("123" ; "plain digits")]
#[test_case("000" ; "all zeros")]
#[test_case("007" ; "leading zeros kept")]
#[test_case("999" ; "upper bound")]
fn accepts_three_digits(input: &str) {
    let ticket = Ticket::parse(input).unwrap();
    assert_eq!(ticket.as_str(), input);
    assert_eq!(ticket.to_string(), input);
}

#[test_case("1a3" ; "letter in the middle")]
#[test_case("abc" ; "all letters")]
#[test_case("1 2" ; "inner space")]
#[test_case(" 12" ; "leading space")]
#[test_case("12 " ; "trailing space")]
#[test_case("-12" ; "sign")]
#[test_case("" ; "empty string")]
#[test_case("１２３" ; "full-width digits")]
fn rejects_non_digits(input: &str) {
    assert_eq!(Ticket::parse(input), Err(TicketError::NotNumeric(input.to_string())));
}

#[test_case("1", 1 ; "one digit")]
#[test_case("12", 2 ; "two digits")]
#[test_case("1234", 4 ; "four digits")]
#[test_case("0000000", 7 ; "many zeros")]
fn rejects_wrong_length(input: &str, len: usize) {
    assert_eq!(Ticket::parse(input), Err(TicketError::WrongLength(len)));
}

#[test]
fn from_str_matches_parse() {
    let parsed: Ticket = "456".parse().unwrap();
    assert_eq!(parsed, Ticket::parse("456").unwrap());

    let err = "45".parse::<Ticket>().unwrap_err();
    assert_eq!(err.to_string(), "ticket number must be 3 digits, got 2");
}

#[test]
fn serializes_as_plain_string() {
    let ticket = Ticket::parse("042").unwrap();
    assert_eq!(serde_json::to_string(&ticket).unwrap(), "\"042\"");
}
