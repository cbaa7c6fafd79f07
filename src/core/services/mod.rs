//! Business logic services
//!
//! Pure logic that operates on decoded records and domain models.
//! These services have no I/O dependencies - they operate on
//! data passed in and return results.
//!
//! - [`filter`] - Keep Saturday draws and report unusable records
//! - [`checker`] - Match tickets against winning draws

pub mod checker;
pub mod filter;

pub use checker::{MatchResult, TicketMatch, find_matches};
pub use filter::{DRAW_DAY, FilterOutcome, SkipReason, SkippedDraw, filter_draws};
