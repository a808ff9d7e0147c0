//! Configuration management for Manifest Union
//!
//! Settings come from defaults overlaid by an optional TOML file. The file is
//! looked up in a fixed order unless one is given explicitly on the command
//! line, in which case it must exist.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::app::{ArtifactNames, PipelineConfig};
use crate::constants::{config as config_files, files};
use crate::errors::{ConfigError, ConfigResult};

/// Unified application configuration for TOML serialization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Results layout
    pub pipeline: PipelineConfigToml,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// TOML-friendly pipeline configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfigToml {
    /// Subdirectory of the source directory receiving the artifacts
    pub results_dir: String,
    /// Concatenated input lines
    pub union_file: String,
    /// Deduplicated lines
    pub unsorted_file: String,
    /// Deduplicated and sorted lines
    pub sorted_file: String,
    /// Final CSV manifest
    pub csv_file: String,
}

impl Default for PipelineConfigToml {
    fn default() -> Self {
        Self {
            results_dir: files::RESULTS_DIR.to_string(),
            union_file: files::UNION_FILE.to_string(),
            unsorted_file: files::UNSORTED_FILE.to_string(),
            sorted_file: files::SORTED_FILE.to_string(),
            csv_file: files::CSV_FILE.to_string(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level used when no verbosity flag is given
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: config_files::DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parsed log level, `None` if the configured name is not a level
    pub fn level(&self) -> Option<tracing::Level> {
        self.level.parse().ok()
    }
}

impl AppConfig {
    /// Load configuration with precedence:
    /// 1. Default values
    /// 2. Config file (explicit path, or the first one found in standard locations)
    pub fn load(config_file_override: Option<&Path>) -> ConfigResult<Self> {
        let config_path = match config_file_override {
            Some(path) if !path.exists() => {
                return Err(ConfigError::NotFound {
                    path: path.to_path_buf(),
                })
            }
            Some(path) => Some(path.to_path_buf()),
            None => Self::find_config_file(),
        };

        let config = match config_path {
            Some(path) => Self::load_from_file(&path)?,
            None => {
                debug!("No config file found, using defaults");
                Self::default()
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would place artifacts outside the results directory
    pub fn validate(&self) -> ConfigResult<()> {
        let names = [
            ("pipeline.results_dir", &self.pipeline.results_dir),
            ("pipeline.union_file", &self.pipeline.union_file),
            ("pipeline.unsorted_file", &self.pipeline.unsorted_file),
            ("pipeline.sorted_file", &self.pipeline.sorted_file),
            ("pipeline.csv_file", &self.pipeline.csv_file),
        ];

        for (field, value) in names {
            if value.is_empty() || value.contains(&['/', '\\'][..]) || value == "." || value == ".." {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    value: value.clone(),
                    reason: "Expected a plain file name".to_string(),
                });
            }
        }

        if self.logging.level().is_none() {
            return Err(ConfigError::InvalidValue {
                field: "logging.level".to_string(),
                value: self.logging.level.clone(),
                reason: "Expected one of: error, warn, info, debug, trace".to_string(),
            });
        }

        Ok(())
    }

    /// Build the runtime configuration for one pipeline run
    pub fn to_pipeline_config(
        &self,
        source_dir: impl Into<PathBuf>,
        version: impl Into<String>,
    ) -> PipelineConfig {
        PipelineConfig {
            source_dir: source_dir.into(),
            version: version.into(),
            results_dir_name: self.pipeline.results_dir.clone(),
            artifacts: ArtifactNames {
                union: self.pipeline.union_file.clone(),
                unsorted: self.pipeline.unsorted_file.clone(),
                sorted: self.pipeline.sorted_file.clone(),
                csv: self.pipeline.csv_file.clone(),
            },
        }
    }

    /// Find configuration file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        let mut search_paths = vec![PathBuf::from(config_files::LOCAL_CONFIG_FILE)];
        if let Some(path) = Self::default_config_path() {
            search_paths.push(path);
        }

        for path in search_paths {
            if path.exists() {
                debug!("Found config file: {}", path.display());
                return Some(path);
            }
        }
        None
    }

    /// Default config file path for the current user
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| {
            dir.join(config_files::APP_CONFIG_DIR)
                .join(config_files::CONFIG_FILE_NAME)
        })
    }

    /// Load configuration from a TOML file
    fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: AppConfig =
            toml::from_str(&content).map_err(|source| ConfigError::InvalidFormat {
                path: path.to_path_buf(),
                source,
            })?;

        info!("Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Generate default configuration content with comments
    pub fn generate_default_config_content() -> String {
        format!(
            r#"# Manifest Union Configuration

[pipeline]
# Subdirectory created inside the source directory
results_dir = "{}"

# Artifact file names, written in this order
union_file = "{}"
unsorted_file = "{}"
sorted_file = "{}"
csv_file = "{}"

[logging]
# Used when no verbosity flag is given: error, warn, info, debug, trace
level = "{}"
"#,
            files::RESULTS_DIR,
            files::UNION_FILE,
            files::UNSORTED_FILE,
            files::SORTED_FILE,
            files::CSV_FILE,
            config_files::DEFAULT_LOG_LEVEL,
        )
    }
}
