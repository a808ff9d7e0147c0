//! Command handlers for the Manifest Union CLI

use tracing::info;

use crate::app::{Pipeline, PipelineReport};
use crate::cli::args::ManifestArgs;
use crate::config::AppConfig;
use crate::errors::{AppError, Result};

/// Handle the manifest command
///
/// Builds the pipeline configuration from the loaded settings and the
/// command's arguments, runs it, and prints a summary unless `quiet` is set.
pub fn handle_manifest(args: ManifestArgs, config: &AppConfig, quiet: bool) -> Result<()> {
    args.validate().map_err(AppError::invalid_arguments)?;

    info!(
        "Creating manifest for version {} from {}",
        args.version,
        args.dir.display()
    );

    let pipeline = Pipeline::new(config.to_pipeline_config(args.dir, args.version));
    let report = pipeline.run()?;

    if !quiet {
        print!("{}", render_summary(&report));
    }
    Ok(())
}

/// Human-readable summary of a finished run
pub fn render_summary(report: &PipelineReport) -> String {
    let stats = &report.stats;
    format!(
        "Manifest for version {}\n\
         ========================\n\
         Files read:         {}\n\
         Lines read:         {}\n\
         Duplicates removed: {}\n\
         Entries written:    {}\n\
         Output:             {}\n",
        report.version,
        stats.files_read,
        stats.lines_read,
        stats.duplicates_removed(),
        stats.entries_written,
        report.paths.csv.display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_handle_manifest_writes_csv() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("a.txt"), "b=2\na=1\n").unwrap();

        let args = ManifestArgs {
            dir: temp_dir.path().to_path_buf(),
            version: "1.0.0".to_string(),
        };
        handle_manifest(args, &AppConfig::default(), true).unwrap();

        let csv = std::fs::read_to_string(temp_dir.path().join("results/manifest.csv")).unwrap();
        assert_eq!(csv, "Dependency,Version\na,1\nb,2\n");
    }

    #[test]
    fn test_handle_manifest_rejects_blank_version() {
        let args = ManifestArgs {
            dir: PathBuf::from("anywhere"),
            version: " ".to_string(),
        };

        let error = handle_manifest(args, &AppConfig::default(), true).unwrap_err();
        assert_eq!(error.category(), "arguments");
    }

    #[test]
    fn test_render_summary() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("a.txt"), "x=1\nx=1\n").unwrap();

        let config = AppConfig::default().to_pipeline_config(temp_dir.path(), "9.9.9");
        let report = Pipeline::new(config).run().unwrap();
        let summary = render_summary(&report);

        assert!(summary.starts_with("Manifest for version 9.9.9"));
        assert!(summary.contains("Duplicates removed: 1"));
        assert!(summary.contains("Entries written:    1"));
    }
}
