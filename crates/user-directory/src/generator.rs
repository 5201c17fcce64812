//! Synthetic user directory generation.
//!
//! Every field apart from salary and join date is a pure function of the
//! record id. Salary and join date come from the supplied RNG, which is the
//! thread RNG by default or a `ChaCha8Rng` when a seed is configured.

use std::fmt;
use std::sync::Arc;

use chrono::{Days, NaiveDate};
use mockable::{Clock, DefaultClock};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::catalogue::{LAST_NAME_VARIANTS, department_for, domain_for};
use crate::record::UserRecord;

/// Number of records in a standard directory.
pub const DEFAULT_RECORD_COUNT: usize = 10_000;

/// Lowest salary a generated record can carry.
pub const SALARY_FLOOR: u32 = 50_000;

/// Width of the salary range; salaries fall in `[floor, floor + span)`.
pub const SALARY_SPAN: u32 = 100_000;

/// Join dates fall within this many days before the generation date.
pub const JOIN_WINDOW_DAYS: u64 = 5 * 365;

/// Configurable directory generator.
///
/// # Example
///
/// ```
/// use user_directory::DatasetGenerator;
///
/// let generator = DatasetGenerator::new(25).with_seed(2026);
/// let records = generator.generate();
///
/// assert_eq!(records.len(), 25);
/// assert_eq!(records.first().map(|r| r.id), Some(1));
/// ```
#[derive(Clone)]
pub struct DatasetGenerator {
    record_count: usize,
    seed: Option<u64>,
    clock: Arc<dyn Clock>,
}

impl DatasetGenerator {
    /// Creates a generator for `record_count` records using the system clock
    /// and an unseeded RNG.
    ///
    /// Ids are `u32`, so counts above `u32::MAX` are capped there.
    #[must_use]
    pub fn new(record_count: usize) -> Self {
        Self {
            record_count: record_count.min(id_space()),
            seed: None,
            clock: Arc::new(DefaultClock),
        }
    }

    /// Makes salary and join date reproducible for the given seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replaces the clock used to determine the generation date.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Returns the number of records this generator produces.
    #[must_use]
    pub const fn record_count(&self) -> usize {
        self.record_count
    }

    /// Returns the configured seed, if any.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Produces exactly `record_count` records with ids `1..=record_count`.
    #[must_use]
    pub fn generate(&self) -> Vec<UserRecord> {
        let today = self.clock.utc().date_naive();
        let records = match self.seed {
            Some(seed) => {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                generate_with_rng(&mut rng, self.record_count, today)
            }
            None => generate_with_rng(&mut rand::rng(), self.record_count, today),
        };
        debug!(
            record_count = records.len(),
            seeded = self.seed.is_some(),
            %today,
            "user directory generated"
        );
        records
    }
}

impl fmt::Debug for DatasetGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatasetGenerator")
            .field("record_count", &self.record_count)
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

impl Default for DatasetGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_RECORD_COUNT)
    }
}

/// Generates `n` records with randomised salary and join date.
///
/// `n` is capped at `u32::MAX`, the size of the id space.
///
/// # Example
///
/// ```
/// use user_directory::generate;
///
/// let records = generate(3);
/// let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
///
/// assert_eq!(
///     names,
///     ["FirstName1 LastName1", "FirstName2 LastName2", "FirstName3 LastName3"]
/// );
/// ```
#[must_use]
pub fn generate(n: usize) -> Vec<UserRecord> {
    DatasetGenerator::new(n).generate()
}

/// Generates the standard directory of [`DEFAULT_RECORD_COUNT`] records.
#[must_use]
pub fn generate_dataset() -> Vec<UserRecord> {
    generate(DEFAULT_RECORD_COUNT)
}

fn generate_with_rng<R>(rng: &mut R, count: usize, today: NaiveDate) -> Vec<UserRecord>
where
    R: Rng,
{
    let last_id = u32::try_from(count).unwrap_or(u32::MAX);
    (1..=last_id).map(|id| build_record(rng, id, today)).collect()
}

fn id_space() -> usize {
    usize::try_from(u32::MAX).unwrap_or(usize::MAX)
}

fn build_record<R>(rng: &mut R, id: u32, today: NaiveDate) -> UserRecord
where
    R: Rng,
{
    let first_name = format!("FirstName{id}");
    let last_name = format!(
        "LastName{}",
        id.checked_rem(LAST_NAME_VARIANTS).unwrap_or(0)
    );
    let email = format!(
        "{}.{}@{}",
        first_name.to_lowercase(),
        last_name.to_lowercase(),
        domain_for(id)
    );

    let salary = SALARY_FLOOR + rng.random_range(0..SALARY_SPAN);
    let days_ago = rng.random_range(0..JOIN_WINDOW_DAYS);
    let join_date = today.checked_sub_days(Days::new(days_ago)).unwrap_or(today);

    UserRecord {
        id,
        name: format!("{first_name} {last_name}"),
        email,
        department: department_for(id).to_owned(),
        salary,
        join_date,
    }
}
