//! Union of every manifest file in a directory
//!
//! The union is a plain concatenation: no line is dropped or reordered here.
//! Duplicate removal is the next stage's job.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::io::read_lines;
use super::types::UnionOutcome;
use crate::errors::{ManifestError, ManifestResult};

/// List the non-directory entries directly inside `dir`
///
/// Subdirectories are skipped without recursion. Paths are returned ordered
/// by file name so repeated runs over the same directory see the same order.
pub fn list_manifest_files<P: AsRef<Path>>(dir: P) -> ManifestResult<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let list_error = |source| ManifestError::ListDirectory {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(list_error)? {
        let entry = entry.map_err(list_error)?;
        let path = entry.path();
        // Follows symlinks, so a link to a directory is skipped like a directory
        let is_dir = fs::metadata(&path)
            .map(|meta| meta.is_dir())
            .map_err(|source| ManifestError::ReadFile {
                path: path.clone(),
                source,
            })?;

        if is_dir {
            debug!("Skipping directory {}", path.display());
            continue;
        }
        files.push(path);
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Concatenate the lines of every manifest file in `dir`
///
/// Lines keep their order within each file, and files are visited in the
/// order returned by [`list_manifest_files`].
pub fn create_union<P: AsRef<Path>>(dir: P) -> ManifestResult<UnionOutcome> {
    let dir = dir.as_ref();
    let files = list_manifest_files(dir)?;

    let mut lines = Vec::new();
    for file in &files {
        let file_lines = read_lines(file)?;
        debug!("{}: {} lines", file.display(), file_lines.len());
        lines.extend(file_lines);
    }

    info!(
        "Built union of {} lines from {} files in {}",
        lines.len(),
        files.len(),
        dir.display()
    );

    Ok(UnionOutcome { files, lines })
}
