//! Command-line interface components
//!
//! This module contains CLI-specific code for Manifest Union: argument
//! parsing and the command handlers.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, GlobalArgs, ManifestArgs};
pub use commands::{handle_manifest, render_summary};
