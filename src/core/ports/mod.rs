//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core business logic
//! and external systems (here, the lottery's HTTP API).
//!
//! Implementations live in the `adapters` module.

mod draw_source;

pub use draw_source::DrawSource;
#[cfg(test)]
pub(crate) use draw_source::MockDrawSource;
