//! Core domain logic for raffle-checker
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Ticket, WinningDraw, WinningSet)
//! - `services/` - Filtering and ticket matching
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
