//! CSV formatting of sorted manifest lines
//!
//! Parsing is all-or-nothing: the first malformed line aborts formatting, so a
//! CSV is only written once every line has been accepted.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{Terminator, WriterBuilder};
use tracing::info;

use super::io::read_lines;
use super::types::ManifestEntry;
use crate::constants::csv::{HEADER_DEPENDENCY, HEADER_VERSION, TERMINATOR};
use crate::errors::{ManifestError, ManifestResult};

/// Parse every line into a [`ManifestEntry`], keeping input order
pub fn format_entries(lines: &[String]) -> ManifestResult<Vec<ManifestEntry>> {
    lines
        .iter()
        .map(|line| ManifestEntry::parse(line))
        .collect()
}

/// Header row followed by one `[dependency, version]` row per entry
pub fn format_rows(entries: &[ManifestEntry]) -> Vec<[&str; 2]> {
    std::iter::once([HEADER_DEPENDENCY, HEADER_VERSION])
        .chain(
            entries
                .iter()
                .map(|entry| [entry.dependency.as_str(), entry.version.as_str()]),
        )
        .collect()
}

/// Read sorted lines from `path` and parse them into entries
pub fn format_file<P: AsRef<Path>>(path: P) -> ManifestResult<Vec<ManifestEntry>> {
    let path = path.as_ref();
    let entries = format_entries(&read_lines(path)?)?;
    info!("Parsed {} entries from {}", entries.len(), path.display());
    Ok(entries)
}

/// Write the header and one row per entry to a CSV file at `path`
pub fn write_csv<P: AsRef<Path>>(path: P, entries: &[ManifestEntry]) -> ManifestResult<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| ManifestError::WriteFile {
        path: path.to_path_buf(),
        source,
    })?;

    encode_csv(file, entries).map_err(|source| ManifestError::Csv {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Wrote {} rows to {}", entries.len(), path.display());
    Ok(())
}

fn encode_csv<W: Write>(output: W, entries: &[ManifestEntry]) -> csv::Result<()> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(TERMINATOR))
        .from_writer(output);

    for row in format_rows(entries) {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}
