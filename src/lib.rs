//! Manifest Union Library
//!
//! Builds a release dependency manifest from a directory of `key=value`
//! files: union, deduplicate, sort, and write a `Dependency,Version` CSV.

pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;

// Re-export commonly used types for convenience
pub use errors::{AppError, Result};
