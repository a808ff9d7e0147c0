//! Core application logic for Manifest Union
//!
//! This module contains the manifest stages and the pipeline that runs them.
//!
//! # Examples
//!
//! ```rust,no_run
//! use manifest_union::app::{Pipeline, PipelineConfig};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PipelineConfig::new("manifests/", "3.12.0");
//! let report = Pipeline::new(config).run()?;
//! println!("Wrote {} entries to {}", report.stats.entries_written, report.paths.csv.display());
//! # Ok(())
//! # }
//! ```

pub mod manifest;
pub mod pipeline;

// Re-export main public API
pub use manifest::{
    create_union, dedup_lines, format_entries, format_rows, sort_lines, ManifestEntry,
    PipelineStats, UnionOutcome,
};
pub use pipeline::{
    ArtifactNames, ArtifactPaths, Pipeline, PipelineConfig, PipelineReport, Stage,
};
