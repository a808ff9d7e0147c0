//! Line-oriented file reading and writing shared by every stage
//!
//! Each function opens its file, does its work, and lets the handle drop on
//! return, so no handle outlives the call on either the success or the error
//! path.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::errors::{ManifestError, ManifestResult};

/// Read a file as a sequence of `\n`-delimited lines
///
/// A trailing `\r` on each line is dropped. Content that is not valid UTF-8
/// is reported as a read error.
pub fn read_lines<P: AsRef<Path>>(path: P) -> ManifestResult<Vec<String>> {
    let path = path.as_ref();
    let read_error = |source| ManifestError::ReadFile {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_error)?;
    let lines = BufReader::new(file)
        .lines()
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(read_error)?;

    debug!("Read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// Write lines to a file, each followed by `\n`, replacing existing content
pub fn write_lines<P: AsRef<Path>>(path: P, lines: &[String]) -> ManifestResult<()> {
    let path = path.as_ref();
    let write_error = |source| ManifestError::WriteFile {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{}", line).map_err(write_error)?;
    }
    writer.flush().map_err(write_error)?;

    debug!("Wrote {} lines to {}", lines.len(), path.display());
    Ok(())
}
