//! Foundation types for the EMBER console.
//!
//! This crate contains the types shared by all EMBER crates: the error
//! enum covering dispatch diagnostics and configuration failures, and the
//! console configuration loaded from TOML.

pub mod config;
pub mod error;

/// Console configuration (quote delimiter, row limit, help pacing).
pub use config::ConsoleConfig;
/// Errors produced by the EMBER console.
pub use error::EmberError;
/// Convenience alias.
pub use error::Result;
