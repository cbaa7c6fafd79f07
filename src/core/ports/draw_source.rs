//! Draw source port
//!
//! Defines the interface for retrieving raw draw results.

use crate::api::{ApiError, GameQuery};

/// Source of raw draw-result bytes
///
/// Implementations send one query and return the undecoded response body.
#[cfg_attr(test, mockall::automock)]
pub trait DrawSource {
    /// Run `query` and return the response body
    fn fetch(&self, query: &GameQuery) -> Result<Vec<u8>, ApiError>;

    /// Where the draws come from, for log messages
    fn describe(&self) -> String;
}
