//! Delayed publication of a generated directory.
//!
//! The loader runs the generator once, then holds the result back for a
//! fixed delay before handing it to the caller. Nothing else can observe the
//! records before publication.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use crate::generator::DatasetGenerator;
use crate::record::UserRecord;

/// Default simulated load latency.
pub const DEFAULT_LOAD_DELAY: Duration = Duration::from_millis(500);

/// A published, read-only directory shared between consumers.
pub type Dataset = Arc<[UserRecord]>;

/// Async sleeping abstraction for the publication delay.
#[async_trait]
pub trait DelaySleeper: Send + Sync {
    /// Suspend execution for `duration`.
    ///
    /// ```rust,no_run
    /// use async_trait::async_trait;
    /// use std::sync::{Arc, Mutex};
    /// use std::time::Duration;
    /// use user_directory::DelaySleeper;
    ///
    /// #[derive(Default)]
    /// struct CountingSleeper {
    ///     calls: Arc<Mutex<u32>>,
    /// }
    ///
    /// #[async_trait]
    /// impl DelaySleeper for CountingSleeper {
    ///     async fn sleep(&self, _duration: Duration) {
    ///         *self.calls.lock().expect("calls mutex") += 1;
    ///     }
    /// }
    /// # async fn demo() {
    /// let sleeper = CountingSleeper::default();
    /// sleeper.sleep(Duration::from_millis(25)).await;
    /// assert_eq!(*sleeper.calls.lock().expect("calls mutex"), 1);
    /// # }
    /// ```
    async fn sleep(&self, duration: Duration);
}

/// Tokio-based sleeper implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl DelaySleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Generates a directory and publishes it after a delay.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use user_directory::{DatasetGenerator, DatasetLoader};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let loader = DatasetLoader::new(DatasetGenerator::new(10), Duration::ZERO);
/// let dataset = loader.load().await;
/// assert_eq!(dataset.len(), 10);
/// # }
/// ```
#[derive(Clone)]
pub struct DatasetLoader {
    generator: DatasetGenerator,
    delay: Duration,
    sleeper: Arc<dyn DelaySleeper>,
}

impl DatasetLoader {
    /// Creates a loader that sleeps on the Tokio timer.
    #[must_use]
    pub fn new(generator: DatasetGenerator, delay: Duration) -> Self {
        Self {
            generator,
            delay,
            sleeper: Arc::new(TokioSleeper),
        }
    }

    /// Replaces the sleeper used for the publication delay.
    #[must_use]
    pub fn with_sleeper(mut self, sleeper: Arc<dyn DelaySleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    /// Returns the configured publication delay.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Generates the directory and returns it once the delay has elapsed.
    pub async fn load(&self) -> Dataset {
        let dataset: Dataset = self.generator.generate().into();
        if !self.delay.is_zero() {
            self.sleeper.sleep(self.delay).await;
        }
        info!(
            record_count = dataset.len(),
            delay_ms = u64::try_from(self.delay.as_millis()).unwrap_or(u64::MAX),
            "user directory published"
        );
        dataset
    }
}

impl std::fmt::Debug for DatasetLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatasetLoader")
            .field("generator", &self.generator)
            .field("delay", &self.delay)
            .finish_non_exhaustive()
    }
}

impl Default for DatasetLoader {
    fn default() -> Self {
        Self::new(DatasetGenerator::default(), DEFAULT_LOAD_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct RecordingSleeper(Mutex<Vec<Duration>>);

    #[async_trait]
    impl DelaySleeper for RecordingSleeper {
        async fn sleep(&self, duration: Duration) {
            self.0.lock().expect("sleeper mutex").push(duration);
        }
    }

    impl RecordingSleeper {
        fn calls(&self) -> Vec<Duration> {
            self.0.lock().expect("sleeper mutex").clone()
        }
    }

    #[tokio::test]
    async fn load_sleeps_for_configured_delay() {
        let sleeper = Arc::new(RecordingSleeper::default());
        let loader = DatasetLoader::new(DatasetGenerator::new(4), Duration::from_millis(250))
            .with_sleeper(sleeper.clone());

        let dataset = loader.load().await;

        assert_eq!(dataset.len(), 4);
        assert_eq!(sleeper.calls(), [Duration::from_millis(250)]);
    }

    #[tokio::test]
    async fn zero_delay_skips_sleeping() {
        let sleeper = Arc::new(RecordingSleeper::default());
        let loader =
            DatasetLoader::new(DatasetGenerator::new(2), Duration::ZERO).with_sleeper(sleeper.clone());

        let dataset = loader.load().await;

        assert_eq!(dataset.len(), 2);
        assert!(sleeper.calls().is_empty());
    }

    #[test]
    fn default_loader_uses_standard_delay() {
        assert_eq!(DatasetLoader::default().delay(), DEFAULT_LOAD_DELAY);
    }
}
