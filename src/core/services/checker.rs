//! Ticket checker - compares entered tickets against winning draws
//!
//! A ticket wins a draw when it equals the draw's unpadded concatenation
//! (see [`WinningCombination::concatenated`](crate::core::models::WinningCombination::concatenated)).
//! Draws containing a number above 9 therefore never match.

use std::collections::BTreeMap;

use crate::core::models::{Ticket, WinningDraw, WinningSet};

/// A ticket that won a draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketMatch {
    /// The winning ticket
    pub ticket: Ticket,
    /// The draw it won
    pub draw: WinningDraw,
}

/// Matches keyed by draw date string, at most one per draw
pub type MatchResult = BTreeMap<String, TicketMatch>;

/// Compare every ticket against every winning draw
#[must_use]
pub fn find_matches(tickets: &[Ticket], winning_set: &WinningSet) -> MatchResult {
    let mut matches = MatchResult::new();

    for (date_key, draw) in winning_set {
        let winning_number = draw.combination.concatenated();
        if let Some(ticket) = tickets.iter().find(|t| t.as_str() == winning_number) {
            matches.insert(
                date_key.clone(),
                TicketMatch {
                    ticket: ticket.clone(),
                    draw: *draw,
                },
            );
        }
    }

    matches
}
