//! Command-line argument parsing for Manifest Union
//!
//! This module defines the CLI structure using clap derive macros.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Manifest Union - Merge dependency manifests into a release CSV
#[derive(Parser, Debug)]
#[command(
    name = "manifest_union",
    version,
    about = "Merge a directory of key=value manifests into a sorted CSV",
    long_about = "Builds a release dependency manifest from a directory of key=value files.
Takes the union of every line, removes duplicates, sorts, and writes a Dependency,Version CSV."
)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all subcommands
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Enable verbose logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Very verbose logging (debug level)
    #[arg(long, global = true)]
    pub very_verbose: bool,

    /// Quiet mode - suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file path
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a CSV manifest of the files in a directory, sorted by dependency name
    #[command(
        long_about = "Create a CSV manifest from a directory of manifests, taking the union of the dependencies.

For example:

manifest_union manifest --dir /path/to/directory --version 1.0.0"
    )]
    Manifest(ManifestArgs),
}

/// Arguments for the manifest command
#[derive(Args, Debug, Clone)]
pub struct ManifestArgs {
    /// Directory of files to be processed
    #[arg(short, long, value_name = "DIR")]
    pub dir: PathBuf,

    /// Version of the manifest being processed
    #[arg(short, long, value_name = "VERSION")]
    pub version: String,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the logging level from the global flags, falling back to `default`
    pub fn log_level(&self, default: tracing::Level) -> tracing::Level {
        if self.global.quiet {
            tracing::Level::ERROR
        } else if self.global.very_verbose {
            tracing::Level::DEBUG
        } else if self.global.verbose {
            tracing::Level::INFO
        } else {
            default
        }
    }
}

impl ManifestArgs {
    /// Reject values clap accepts but the pipeline cannot use
    pub fn validate(&self) -> Result<(), String> {
        if self.dir.as_os_str().is_empty() {
            return Err("Directory must not be empty".to_string());
        }

        if self.version.trim().is_empty() {
            return Err("Version must not be empty".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest_args(dir: &str, version: &str) -> ManifestArgs {
        ManifestArgs {
            dir: PathBuf::from(dir),
            version: version.to_string(),
        }
    }

    #[test]
    fn test_manifest_args_validation() {
        assert!(manifest_args("manifests", "1.0.0").validate().is_ok());
        assert!(manifest_args("", "1.0.0").validate().is_err());
        assert!(manifest_args("manifests", "  ").validate().is_err());
    }

    #[test]
    fn test_parse_short_flags() {
        let cli = Cli::try_parse_from(["manifest_union", "manifest", "-d", "deps", "-v", "3.12.0"])
            .unwrap();

        let Commands::Manifest(args) = cli.command;
        assert_eq!(args.dir, PathBuf::from("deps"));
        assert_eq!(args.version, "3.12.0");
    }

    #[test]
    fn test_parse_long_flags_with_globals() {
        let cli = Cli::try_parse_from([
            "manifest_union",
            "manifest",
            "--dir",
            "deps",
            "--version",
            "3.12.0",
            "--verbose",
            "--config",
            "custom.toml",
        ])
        .unwrap();

        assert!(cli.global.verbose);
        assert_eq!(cli.global.config, Some(PathBuf::from("custom.toml")));
    }

    #[test]
    fn test_both_parameters_are_required() {
        assert!(Cli::try_parse_from(["manifest_union", "manifest", "-d", "deps"]).is_err());
        assert!(Cli::try_parse_from(["manifest_union", "manifest", "-v", "1.0"]).is_err());
    }

    #[test]
    fn test_log_level() {
        let quiet = Cli::try_parse_from(["manifest_union", "-q", "manifest", "-d", "d", "-v", "1"])
            .unwrap();
        let verbose =
            Cli::try_parse_from(["manifest_union", "--verbose", "manifest", "-d", "d", "-v", "1"])
                .unwrap();
        let plain =
            Cli::try_parse_from(["manifest_union", "manifest", "-d", "d", "-v", "1"]).unwrap();

        assert_eq!(quiet.log_level(tracing::Level::WARN), tracing::Level::ERROR);
        assert_eq!(verbose.log_level(tracing::Level::WARN), tracing::Level::INFO);
        assert_eq!(plain.log_level(tracing::Level::TRACE), tracing::Level::TRACE);
    }
}
