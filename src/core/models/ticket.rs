//! Raffle ticket numbers
//!
//! A ticket is exactly three ASCII digits, kept as a string so leading zeros
//! survive ("007" stays "007").

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

/// Required ticket length
pub const TICKET_LENGTH: usize = 3;

static DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("digit pattern is a valid regex"));

/// Reasons a line is not a ticket number
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TicketError {
    /// Contains something other than digits (letters, spaces, or nothing)
    #[error("ticket number must contain only digits: {0:?}")]
    NotNumeric(String),

    /// All digits, but not three of them
    #[error("ticket number must be 3 digits, got {0}")]
    WrongLength(usize),
}

/// A validated three-digit ticket number
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Ticket(String);

impl Ticket {
    /// Validate a line as a ticket number
    ///
    /// # Examples
    ///
    /// ```
    /// use raffle_checker::core::models::{Ticket, TicketError};
    ///
    /// assert_eq!(Ticket::parse("042").unwrap().as_str(), "042");
    /// assert_eq!(Ticket::parse("1a3"), Err(TicketError::NotNumeric("1a3".into())));
    /// assert_eq!(Ticket::parse("12"), Err(TicketError::WrongLength(2)));
    /// ```
    pub fn parse(input: &str) -> Result<Self, TicketError> {
        if !DIGITS.is_match(input) {
            return Err(TicketError::NotNumeric(input.to_string()));
        }
        if input.len() != TICKET_LENGTH {
            return Err(TicketError::WrongLength(input.len()));
        }
        Ok(Self(input.to_string()))
    }

    /// The ticket digits
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Ticket {
    type Err = TicketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
