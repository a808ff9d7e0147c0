//! Pipeline orchestration
//!
//! The [`Pipeline`] runs the four manifest stages in strict order. Each stage
//! reads the artifact the previous one wrote, so every intermediate result
//! stays inspectable under the results directory. The first error stops the
//! run; artifacts written before it are left in place.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use super::manifest::{
    create_union, format_file, remove_duplicates, sort_file, write_csv, write_lines,
    PipelineStats,
};
use crate::constants::{commands, files};
use crate::errors::{AppError, ManifestError, ManifestResult, Result};

/// Pipeline stage, used to label failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Checking the source and creating the results directory
    Prepare,
    /// Concatenating the source files
    Union,
    /// Removing repeated lines
    Deduplicate,
    /// Ordering lines
    Sort,
    /// Parsing entries and writing the CSV
    Format,
}

impl Stage {
    /// Lowercase stage name
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Prepare => "prepare",
            Stage::Union => "union",
            Stage::Deduplicate => "deduplicate",
            Stage::Sort => "sort",
            Stage::Format => "format",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// File names of the four artifacts inside the results directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactNames {
    pub union: String,
    pub unsorted: String,
    pub sorted: String,
    pub csv: String,
}

impl Default for ArtifactNames {
    fn default() -> Self {
        Self {
            union: files::UNION_FILE.to_string(),
            unsorted: files::UNSORTED_FILE.to_string(),
            sorted: files::SORTED_FILE.to_string(),
            csv: files::CSV_FILE.to_string(),
        }
    }
}

/// Runtime configuration for a single pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Directory holding the input manifests
    pub source_dir: PathBuf,
    /// Release version the manifest is prepared for
    pub version: String,
    /// Name of the results subdirectory created under `source_dir`
    pub results_dir_name: String,
    /// Artifact file names
    pub artifacts: ArtifactNames,
}

impl PipelineConfig {
    /// Configuration with default results layout
    pub fn new(source_dir: impl Into<PathBuf>, version: impl Into<String>) -> Self {
        Self {
            source_dir: source_dir.into(),
            version: version.into(),
            results_dir_name: files::RESULTS_DIR.to_string(),
            artifacts: ArtifactNames::default(),
        }
    }

    /// Directory receiving every artifact
    pub fn results_dir(&self) -> PathBuf {
        self.source_dir.join(&self.results_dir_name)
    }

    /// Resolved artifact paths
    pub fn artifact_paths(&self) -> ArtifactPaths {
        let results_dir = self.results_dir();
        ArtifactPaths {
            union: results_dir.join(&self.artifacts.union),
            unsorted: results_dir.join(&self.artifacts.unsorted),
            sorted: results_dir.join(&self.artifacts.sorted),
            csv: results_dir.join(&self.artifacts.csv),
            results_dir,
        }
    }
}

/// Absolute locations of the run's artifacts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub results_dir: PathBuf,
    pub union: PathBuf,
    pub unsorted: PathBuf,
    pub sorted: PathBuf,
    pub csv: PathBuf,
}

/// Outcome of a successful run
#[derive(Debug, Clone)]
pub struct PipelineReport {
    /// Release version the run was invoked with
    pub version: String,
    /// Where each artifact was written
    pub paths: ArtifactPaths,
    /// Counters collected along the way
    pub stats: PipelineStats,
}

/// Sequential runner for the union, dedup, sort, and format stages
#[derive(Debug)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a pipeline for the given configuration
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Run every stage in order, stopping at the first failure
    pub fn run(&self) -> Result<PipelineReport> {
        let paths = self.config.artifact_paths();
        let mut stats = PipelineStats::default();

        info!(
            "Building manifest for version {} from {}",
            self.config.version,
            self.config.source_dir.display()
        );

        stage(Stage::Prepare, || {
            ensure_directory(&self.config.source_dir)?;
            create_results_dir(&paths.results_dir)
        })?;

        stage(Stage::Union, || {
            let union = create_union(&self.config.source_dir)?;
            stats.files_read = union.files.len();
            stats.lines_read = union.lines.len();
            write_lines(&paths.union, &union.lines)
        })?;

        stage(Stage::Deduplicate, || {
            let unique = remove_duplicates(&paths.union)?;
            stats.unique_lines = unique.len();
            write_lines(&paths.unsorted, &unique)
        })?;

        stage(Stage::Sort, || {
            let sorted = sort_file(&paths.unsorted)?;
            write_lines(&paths.sorted, &sorted)
        })?;

        stage(Stage::Format, || {
            let entries = format_file(&paths.sorted)?;
            stats.entries_written = entries.len();
            write_csv(&paths.csv, &entries)
        })?;

        info!(
            "Manifest for version {} written to {}",
            self.config.version,
            paths.csv.display()
        );

        Ok(PipelineReport {
            version: self.config.version.clone(),
            paths,
            stats,
        })
    }
}

fn stage<F>(stage: Stage, run: F) -> Result<()>
where
    F: FnOnce() -> ManifestResult<()>,
{
    debug!("Starting {} stage", stage);
    run().map_err(|source| {
        error!(command = commands::MANIFEST, stage = %stage, "{}", source);
        AppError::Pipeline {
            command: commands::MANIFEST,
            stage,
            source,
        }
    })
}

fn ensure_directory(path: &Path) -> ManifestResult<()> {
    let list_error = |source| ManifestError::ListDirectory {
        path: path.to_path_buf(),
        source,
    };

    let metadata = fs::metadata(path).map_err(list_error)?;
    if !metadata.is_dir() {
        return Err(list_error(io::Error::new(
            io::ErrorKind::InvalidInput,
            "not a directory",
        )));
    }
    Ok(())
}

fn create_results_dir(path: &Path) -> ManifestResult<()> {
    fs::create_dir_all(path).map_err(|source| ManifestError::CreateDirectory {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_manifest(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_end_to_end_two_files() {
        let temp_dir = TempDir::new().unwrap();
        write_manifest(temp_dir.path(), "one.txt", "x=1\ny=2\n");
        write_manifest(temp_dir.path(), "two.txt", "y=2\nz=3\n");

        let report = Pipeline::new(PipelineConfig::new(temp_dir.path(), "1.0.0"))
            .run()
            .unwrap();

        let csv = fs::read_to_string(&report.paths.csv).unwrap();
        assert_eq!(csv, "Dependency,Version\nx,1\ny,2\nz,3\n");
        assert_eq!(report.version, "1.0.0");
        assert_eq!(
            report.stats,
            PipelineStats {
                files_read: 2,
                lines_read: 4,
                unique_lines: 3,
                entries_written: 3,
            }
        );
    }

    #[test]
    fn test_intermediate_artifacts_are_written() {
        let temp_dir = TempDir::new().unwrap();
        write_manifest(temp_dir.path(), "a.txt", "z=3\nx=1\n");
        write_manifest(temp_dir.path(), "b.txt", "x=1\ny=2\n");

        let report = Pipeline::new(PipelineConfig::new(temp_dir.path(), "2.0"))
            .run()
            .unwrap();
        let paths = &report.paths;

        // The dedup stage overwrites the union file with its output
        assert_eq!(fs::read_to_string(&paths.union).unwrap(), "z=3\nx=1\ny=2\n");
        assert_eq!(fs::read_to_string(&paths.unsorted).unwrap(), "z=3\nx=1\ny=2\n");
        assert_eq!(fs::read_to_string(&paths.sorted).unwrap(), "x=1\ny=2\nz=3\n");
        assert_eq!(paths.results_dir, temp_dir.path().join("results"));
    }

    #[test]
    fn test_rerun_ignores_results_directory() {
        let temp_dir = TempDir::new().unwrap();
        write_manifest(temp_dir.path(), "a.txt", "x=1\n");
        let pipeline = Pipeline::new(PipelineConfig::new(temp_dir.path(), "1.0.0"));

        pipeline.run().unwrap();
        let report = pipeline.run().unwrap();

        assert_eq!(report.stats.files_read, 1);
        assert_eq!(
            fs::read_to_string(&report.paths.csv).unwrap(),
            "Dependency,Version\nx,1\n"
        );
    }

    #[test]
    fn test_malformed_line_stops_before_csv() {
        let temp_dir = TempDir::new().unwrap();
        write_manifest(temp_dir.path(), "a.txt", "x=1\na=b=c\n");
        let config = PipelineConfig::new(temp_dir.path(), "1.0.0");
        let paths = config.artifact_paths();

        let error = Pipeline::new(config).run().unwrap_err();

        assert_eq!(error.stage(), Some(Stage::Format));
        assert!(error.to_string().contains("a=b=c"));
        assert!(paths.sorted.exists());
        assert!(!paths.csv.exists());
    }

    #[test]
    fn test_missing_source_directory_fails_without_creating_it() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("absent");

        let error = Pipeline::new(PipelineConfig::new(&source, "1.0.0"))
            .run()
            .unwrap_err();

        assert_eq!(error.stage(), Some(Stage::Prepare));
        assert_eq!(error.category(), "list");
        assert!(!source.exists());
    }

    #[test]
    fn test_source_that_is_a_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("manifest.txt");
        fs::write(&source, "x=1\n").unwrap();

        let error = Pipeline::new(PipelineConfig::new(&source, "1.0.0"))
            .run()
            .unwrap_err();

        assert_eq!(error.stage(), Some(Stage::Prepare));
    }

    #[test]
    fn test_custom_artifact_names() {
        let temp_dir = TempDir::new().unwrap();
        write_manifest(temp_dir.path(), "a.txt", "x=1\n");
        let mut config = PipelineConfig::new(temp_dir.path(), "1.0.0");
        config.results_dir_name = "out".to_string();
        config.artifacts.csv = "deps.csv".to_string();

        let report = Pipeline::new(config).run().unwrap();

        assert_eq!(report.paths.csv, temp_dir.path().join("out").join("deps.csv"));
        assert!(report.paths.csv.exists());
    }
}
