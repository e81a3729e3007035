//! Database access layer.
//!
//! This module provides the PODR session:
//! - Connection lifecycle (open, read-only pinning, close)
//! - Column decoding to display strings

pub mod client;
pub mod types;

pub use client::PodrClient;
pub use types::RowToText;
