//! Draw filter - keeps the Saturday draws
//!
//! Walks decoded draw records and builds the [`WinningSet`]. Records that
//! cannot be used are returned in [`FilterOutcome::skipped`] instead of being
//! dropped silently.

use chrono::{DateTime, Datelike, Weekday};

use crate::api::DrawResultRecord;
use crate::core::models::{WinningCombination, WinningDraw, WinningSet};

/// Weekday the raffle is drawn on
pub const DRAW_DAY: Weekday = Weekday::Sat;

/// Why a draw record was left out of the winning set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// `drawDate` is not valid RFC3339
    UnparseableDate(String),
    /// A Saturday draw without exactly three numbers
    IncompleteNumbers(usize),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnparseableDate(err) => write!(f, "unparseable draw date ({err})"),
            Self::IncompleteNumbers(n) => write!(f, "expected 3 draw numbers, found {n}"),
        }
    }
}

/// A record the filter could not use
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedDraw {
    /// The record's `drawDate`, verbatim
    pub date_key: String,
    /// Why it was skipped
    pub reason: SkipReason,
}

/// Result of filtering a batch of draw records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Saturday draws, keyed by date string
    pub winning_set: WinningSet,
    /// Records that were skipped
    pub skipped: Vec<SkippedDraw>,
}

/// Keep draws that fall on [`DRAW_DAY`] in their own UTC offset
///
/// Later records overwrite earlier ones with the same `drawDate`.
pub fn filter_draws<'a, I>(records: I) -> FilterOutcome
where
    I: IntoIterator<Item = &'a DrawResultRecord>,
{
    let mut outcome = FilterOutcome::default();

    for record in records {
        let drawn_at = match DateTime::parse_from_rfc3339(&record.draw_date) {
            Ok(date) => date,
            Err(err) => {
                outcome.skipped.push(SkippedDraw {
                    date_key: record.draw_date.clone(),
                    reason: SkipReason::UnparseableDate(err.to_string()),
                });
                continue;
            },
        };

        if drawn_at.weekday() != DRAW_DAY {
            continue;
        }

        let numbers = record.winning_numbers.numbers();
        let Some(combination) = WinningCombination::from_slice(numbers) else {
            outcome.skipped.push(SkippedDraw {
                date_key: record.draw_date.clone(),
                reason: SkipReason::IncompleteNumbers(numbers.len()),
            });
            continue;
        };

        outcome.winning_set.insert(
            record.draw_date.clone(),
            WinningDraw {
                drawn_at,
                sequence: record.draw_sequence,
                combination,
            },
        );
    }

    outcome
}
