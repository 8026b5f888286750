//! Error types for revlex-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while building dictionary artifacts.
///
/// Malformed individual records never surface here; they are skipped at
/// the record level. These variants cover the hard failure modes:
/// missing or unreadable input files and unwritable outputs.
#[derive(Error, Debug)]
pub enum BuildError {
    /// An input file could not be opened or read.
    #[error("failed to read {path}: {source}")]
    ReadInput {
        /// The input path.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// An output file could not be created or written.
    #[error("failed to write {path}: {source}")]
    WriteOutput {
        /// The output path.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A whole-file artifact (not a per-line record) failed to parse.
    #[error("failed to parse {path}: {source}")]
    ParseArtifact {
        /// The artifact path.
        path: Utf8PathBuf,
        /// The underlying serde error.
        source: serde_json::Error,
    },
}

/// Result type alias using [`BuildError`].
pub type BuildResult<T> = Result<T, BuildError>;
