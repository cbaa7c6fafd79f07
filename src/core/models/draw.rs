//! Winning draws
//!
//! A draw that survived filtering: its parsed date, sequence number, and the
//! three numbers that were drawn.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// The three numbers of a pick-three draw, in draw order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct WinningCombination([u32; 3]);

impl WinningCombination {
    /// Wrap three drawn numbers
    #[must_use]
    pub const fn new(numbers: [u32; 3]) -> Self {
        Self(numbers)
    }

    /// Build from a slice, if it holds exactly three numbers
    #[must_use]
    pub fn from_slice(numbers: &[u32]) -> Option<Self> {
        <[u32; 3]>::try_from(numbers).ok().map(Self)
    }

    /// The drawn numbers
    #[must_use]
    pub const fn numbers(&self) -> [u32; 3] {
        self.0
    }

    /// Decimal concatenation of the numbers with no zero padding
    ///
    /// `[1, 2, 3]` gives `"123"`, while `[7, 14, 22]` gives `"71422"`. Only
    /// combinations of single-digit numbers can equal a three-digit ticket.
    #[must_use]
    pub fn concatenated(&self) -> String {
        let [a, b, c] = self.0;
        format!("{a}{b}{c}")
    }
}

impl std::fmt::Display for WinningCombination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.concatenated())
    }
}

/// A Saturday draw kept in the winning set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningDraw {
    /// Draw timestamp, in the offset the endpoint reported
    pub drawn_at: DateTime<FixedOffset>,
    /// Sequence number of the draw
    pub sequence: u32,
    /// Drawn numbers
    pub combination: WinningCombination,
}

impl WinningDraw {
    /// Draw date as shown to the operator, e.g. `Jan 03, 2026`
    #[must_use]
    pub fn display_date(&self) -> String {
        display_date(&self.drawn_at)
    }
}

/// Format a draw date as `{Mon} {DD}, {YYYY}`
#[must_use]
pub fn display_date(date: &DateTime<FixedOffset>) -> String {
    date.format("%b %d, %Y").to_string()
}
