//! Manifest stage implementations
//!
//! Each stage is a plain function over lines, paired with a file-backed
//! wrapper that reads its input from the previous stage's artifact.
//!
//! # Module Organization
//!
//! - [`types`] - Core data structures (ManifestEntry, UnionOutcome, PipelineStats)
//! - [`io`] - Line-oriented reading and writing shared by all stages
//! - [`union`] - Concatenation of every file in the source directory
//! - [`dedup`] - First-occurrence deduplication
//! - [`sort`] - Byte-wise lexicographic ordering
//! - [`format`] - `key=value` parsing and CSV output
//!
//! # Examples
//!
//! ```rust,no_run
//! use manifest_union::app::manifest::{create_union, dedup_lines, format_entries, sort_lines};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let union = create_union("manifests/")?;
//! let lines = sort_lines(dedup_lines(union.lines));
//! let entries = format_entries(&lines)?;
//! for entry in &entries {
//!     println!("{} -> {}", entry.dependency, entry.version);
//! }
//! # Ok(())
//! # }
//! ```

pub mod dedup;
pub mod format;
pub mod io;
pub mod sort;
pub mod types;
pub mod union;

pub use dedup::{dedup_lines, remove_duplicates};
pub use format::{format_entries, format_file, format_rows, write_csv};
pub use io::{read_lines, write_lines};
pub use sort::{sort_file, sort_lines};
pub use types::{ManifestEntry, PipelineStats, UnionOutcome};
pub use union::{create_union, list_manifest_files};
