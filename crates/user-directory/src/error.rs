//! Error types for the user-directory crate.
//!
//! Generation and filtering are total and have no error type. Failures only
//! arise while loading configuration.

use thiserror::Error;

/// Errors raised while loading or validating [`crate::DirectorySettings`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// OrthoConfig could not merge the configuration sources.
    #[error("failed to load settings: {message}")]
    Load {
        /// Description of the loading failure.
        message: String,
    },

    /// The directory would contain no records.
    #[error("record count must be at least 1")]
    EmptyDirectory,

    /// The record count does not fit the id space.
    #[error("record count {count} exceeds the maximum record id")]
    RecordCountTooLarge {
        /// Requested record count.
        count: usize,
    },

    /// The publication delay is longer than allowed.
    #[error("load delay of {millis} ms exceeds the {max} ms limit")]
    LoadDelayTooLong {
        /// Requested delay in milliseconds.
        millis: u64,
        /// Largest accepted delay in milliseconds.
        max: u64,
    },
}
