//! Domain models for raffle-checker
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Ticket`] - A validated three-digit ticket number
//! - [`WinningDraw`] - A Saturday draw and its numbers
//! - [`WinningSet`] - Winning draws keyed by draw date

mod draw;
mod ticket;
mod winning_set;

pub use draw::{WinningCombination, WinningDraw, display_date};
pub use ticket::{TICKET_LENGTH, Ticket, TicketError};
pub use winning_set::WinningSet;
