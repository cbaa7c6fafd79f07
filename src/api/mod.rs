//! Draw-results API layer
//!
//! Typed request and response structures for the lottery's GraphQL endpoint,
//! independent of the HTTP client that carries them.
//!
//! ## Design
//!
//! - **Queries are plain data**: [`GameQuery`] serializes to the batched payload
//! - **Responses decode in one step**: [`decode_response`] turns bytes into envelopes
//! - **Errors are typed**: [`ApiError`] separates transport, status, and decode failures

mod error;
mod query;
mod types;

pub use error::ApiError;
pub use query::{DateRange, GAME_QUERY, GameQuery, GameVariables, OPERATION_NAME};
pub use types::{
    DrawResultRecord, GameByCode, GameData, GameEnvelope, WinningNumbers, decode_response, draws,
};
