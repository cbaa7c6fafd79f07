//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `http/` - Draw results fetched from the lottery API

pub mod http;

pub use http::{DEFAULT_API_URL, HttpDrawSource};
