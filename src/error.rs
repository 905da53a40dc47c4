//! Error types for configuration loading, pack generation and preview output.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Failure to load the color pack configuration.
///
/// Always fatal: nothing is generated when the configuration cannot be read.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read (missing, unreadable).
    #[error("failed to read color pack config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration file is not valid JSON or does not match the schema.
    #[error("failed to parse color pack config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A pack's `color` is not a `#rgb`, `#rrggbb` or `#rrggbbaa` hex string.
    #[error("color pack '{pack}' has invalid color '{color}'")]
    InvalidColor { pack: String, color: String },

    /// A pack's `name` cannot be used as an output directory name.
    #[error("color pack '{pack}' has invalid name '{name}'")]
    InvalidName { pack: String, name: String },
}

// ============================================================================
// FileError
// ============================================================================

/// A recoverable I/O failure on a single source or output file.
///
/// The generator records these and moves on to the next file.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("error reading {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error writing {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output directory for a whole pack could not be created.
    #[error("error creating directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FileError {
    /// Returns the path the failure refers to.
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. } | Self::Write { path, .. } | Self::CreateDir { path, .. } => {
                path.as_path()
            }
        }
    }
}

// ============================================================================
// PreviewWriteError
// ============================================================================

/// Failure writing the HTML preview document.
#[derive(Debug, Error)]
#[error("failed to write preview {}: {source}", .path.display())]
pub struct PreviewWriteError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}
