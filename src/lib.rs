//! PODR Client Library
//!
//! This library implements a minimal read-only client for PHUSE's Open Data
//! Repository ("PODR"), a hosted PostgreSQL database. It connects with
//! credentials taken from the environment, lists the available tables, and
//! prints a sample of FDA adverse-event records.

pub mod config;
pub mod db;
pub mod error;
pub mod queries;

pub use config::Config;
pub use error::PodrError;
