//! Error types for the search CLI.

use std::io;

use thiserror::Error;

use crate::error::SettingsError;

/// Errors surfaced while running the search CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Settings could not be loaded or validated.
    #[error("settings error: {source}")]
    Settings {
        /// Underlying settings error.
        #[from]
        #[source]
        source: SettingsError,
    },
    /// The async runtime could not be started.
    #[error("failed to start runtime: {source}")]
    Runtime {
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// A query line could not be read.
    #[error("failed to read query: {source}")]
    ReadQuery {
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// A report could not be written.
    #[error("failed to write report: {source}")]
    WriteReport {
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// A report could not be encoded as JSON.
    #[error("failed to encode report: {source}")]
    EncodeReport {
        /// Underlying serialisation error.
        #[from]
        #[source]
        source: serde_json::Error,
    },
}
