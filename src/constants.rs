//! Application constants for Manifest Union
//!
//! This module centralizes the constants used throughout the application,
//! organized by functional domain.

/// Names of the artifacts written beneath the source directory
pub mod files {
    /// Subdirectory of the source directory that receives all artifacts
    pub const RESULTS_DIR: &str = "results";

    /// Concatenation of every input line (deduplicated in place by stage two)
    pub const UNION_FILE: &str = "union.txt";

    /// Deduplicated lines in order of first appearance
    pub const UNSORTED_FILE: &str = "unsorted.txt";

    /// Deduplicated lines in byte-wise order
    pub const SORTED_FILE: &str = "sorted.txt";

    /// Final two-column CSV manifest
    pub const CSV_FILE: &str = "manifest.csv";
}

/// Manifest entry syntax
pub mod entry {
    /// Separator between dependency name and version
    pub const SEPARATOR: char = '=';
}

/// CSV output format
pub mod csv {
    /// Header of the dependency column
    pub const HEADER_DEPENDENCY: &str = "Dependency";

    /// Header of the version column
    pub const HEADER_VERSION: &str = "Version";

    /// Record terminator
    pub const TERMINATOR: u8 = b'\n';
}

/// Configuration file discovery
pub mod config {
    /// Project-local configuration file name
    pub const LOCAL_CONFIG_FILE: &str = "manifest-union.toml";

    /// Directory name under the user config directory
    pub const APP_CONFIG_DIR: &str = "manifest-union";

    /// File name under [`APP_CONFIG_DIR`]
    pub const CONFIG_FILE_NAME: &str = "config.toml";

    /// Log level used when neither a flag nor the config file sets one
    pub const DEFAULT_LOG_LEVEL: &str = "warn";
}

/// Command names used in error reports
pub mod commands {
    /// The manifest-building entry point
    pub const MANIFEST: &str = "manifest";
}
