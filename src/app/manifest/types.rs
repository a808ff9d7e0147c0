//! Core types for manifest processing
//!
//! This module contains the data structures passed between pipeline stages:
//! the parsed manifest entry, the union result, and run statistics.

use std::fmt;
use std::path::PathBuf;

use crate::constants::entry::SEPARATOR;
use crate::errors::{ManifestError, ManifestResult};

/// One `dependency=version` pair destined for a CSV row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Dependency name (text before the separator)
    pub dependency: String,
    /// Version string (text after the separator)
    pub version: String,
}

impl ManifestEntry {
    /// Parse a manifest line of the form `dependency=version`
    ///
    /// The line must contain exactly one `=`. The line is taken verbatim:
    /// no trimming, and empty components are accepted.
    pub fn parse(line: &str) -> ManifestResult<Self> {
        let mut parts = line.split(SEPARATOR);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(dependency), Some(version), None) => Ok(Self {
                dependency: dependency.to_string(),
                version: version.to_string(),
            }),
            _ => Err(ManifestError::MalformedEntry {
                line: line.to_string(),
            }),
        }
    }
}

impl fmt::Display for ManifestEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.dependency, SEPARATOR, self.version)
    }
}

/// Result of the union stage
#[derive(Debug, Clone, Default)]
pub struct UnionOutcome {
    /// Files that contributed lines, in visiting order
    pub files: Vec<PathBuf>,
    /// Every line of every file, concatenated
    pub lines: Vec<String>,
}

/// Statistics about a pipeline run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineStats {
    /// Manifest files read by the union stage
    pub files_read: usize,
    /// Lines in the union, duplicates included
    pub lines_read: usize,
    /// Lines left after deduplication
    pub unique_lines: usize,
    /// Rows written to the CSV, header excluded
    pub entries_written: usize,
}

impl PipelineStats {
    /// Number of lines dropped as duplicates
    pub fn duplicates_removed(&self) -> usize {
        self.lines_read.saturating_sub(self.unique_lines)
    }
}
