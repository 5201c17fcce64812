//! Directory settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `USER_DIRECTORY_*` environment variables, and
//! configuration files, in OrthoConfig's usual precedence order.

use std::ffi::OsString;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::error::SettingsError;
use crate::generator::{DEFAULT_RECORD_COUNT, DatasetGenerator};
use crate::loader::DatasetLoader;

/// Longest publication delay accepted from configuration.
pub const MAX_LOAD_DELAY_MS: u64 = 10_000;

/// Configuration for loading and searching the directory.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USER_DIRECTORY")]
pub struct DirectorySettings {
    /// Number of records to generate.
    #[ortho_config(default = 10000)]
    pub record_count: usize,
    /// Simulated load latency in milliseconds.
    #[ortho_config(default = 500)]
    pub load_delay_ms: u64,
    /// Optional RNG seed for reproducible salaries and join dates.
    pub seed: Option<u64>,
    /// Maximum number of records printed per query.
    #[ortho_config(default = 20)]
    pub result_limit: usize,
    /// Single query to run instead of reading queries from stdin.
    pub query: Option<String>,
}

impl DirectorySettings {
    /// Loads settings from the given arguments plus environment and files.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Load`] when OrthoConfig rejects the sources,
    /// or a validation error from [`DirectorySettings::validate`].
    pub fn load_validated<I, T>(args: I) -> Result<Self, SettingsError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let settings = Self::load_from_iter(args).map_err(|err| SettingsError::Load {
            message: err.to_string(),
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Checks the settings for values the loader cannot honour.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when the record count is zero, exceeds the
    /// id space, or the load delay is above [`MAX_LOAD_DELAY_MS`].
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.record_count == 0 {
            return Err(SettingsError::EmptyDirectory);
        }
        if u32::try_from(self.record_count).is_err() {
            return Err(SettingsError::RecordCountTooLarge {
                count: self.record_count,
            });
        }
        if self.load_delay_ms > MAX_LOAD_DELAY_MS {
            return Err(SettingsError::LoadDelayTooLong {
                millis: self.load_delay_ms,
                max: MAX_LOAD_DELAY_MS,
            });
        }
        Ok(())
    }

    /// Returns the publication delay.
    #[must_use]
    pub const fn load_delay(&self) -> Duration {
        Duration::from_millis(self.load_delay_ms)
    }

    /// Builds a generator matching these settings.
    #[must_use]
    pub fn generator(&self) -> DatasetGenerator {
        let generator = DatasetGenerator::new(self.record_count);
        match self.seed {
            Some(seed) => generator.with_seed(seed),
            None => generator,
        }
    }

    /// Builds a loader matching these settings.
    #[must_use]
    pub fn loader(&self) -> DatasetLoader {
        DatasetLoader::new(self.generator(), self.load_delay())
    }
}

impl Default for DirectorySettings {
    fn default() -> Self {
        Self {
            record_count: DEFAULT_RECORD_COUNT,
            load_delay_ms: 500,
            seed: None,
            result_limit: 20,
            query: None,
        }
    }
}
