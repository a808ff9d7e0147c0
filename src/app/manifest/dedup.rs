//! First-occurrence deduplication

use std::collections::HashSet;
use std::path::Path;

use tracing::info;

use super::io::{read_lines, write_lines};
use crate::errors::ManifestResult;

/// Keep the first occurrence of each distinct line, in order of appearance
pub fn dedup_lines(lines: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(lines.len());
    lines
        .into_iter()
        .filter(|line| seen.insert(line.clone()))
        .collect()
}

/// Deduplicate the lines of `path` and overwrite it with the result
///
/// Returns the surviving lines so the caller can hand them to the next stage.
pub fn remove_duplicates<P: AsRef<Path>>(path: P) -> ManifestResult<Vec<String>> {
    let path = path.as_ref();
    let lines = read_lines(path)?;
    let before = lines.len();

    let unique = dedup_lines(lines);
    write_lines(path, &unique)?;

    info!(
        "Removed {} duplicate lines from {} ({} unique)",
        before - unique.len(),
        path.display(),
        unique.len()
    );
    Ok(unique)
}
