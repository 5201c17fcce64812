//! Synthetic user directory generation and linear substring search.
//!
//! This crate produces a fixed-size directory of synthetic user records and
//! filters it against free-text queries. The filter is a pure function so
//! callers decide when, and whether, to cache its results.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Generating records whose structure is a pure function of the id
//! - Optional seeding for reproducible salaries and join dates
//! - Case-insensitive substring search across five fields
//! - Delayed publication of the generated directory
//! - Configuration through OrthoConfig
//!
//! # Example
//!
//! ```
//! use user_directory::{filter, generate};
//!
//! let records = generate(100);
//! let hits = filter(&records, "ENGINEERING");
//!
//! assert_eq!(hits.len(), 12);
//! assert!(hits.windows(2).all(|pair| pair[0].id < pair[1].id));
//! ```

mod catalogue;
pub mod cli;
mod config;
mod error;
mod filter;
mod generator;
mod loader;
mod record;
mod session;

pub use catalogue::{DEPARTMENTS, DOMAINS, LAST_NAME_VARIANTS, department_for, domain_for};
pub use config::{DirectorySettings, MAX_LOAD_DELAY_MS};
pub use error::SettingsError;
pub use filter::{SearchQuery, filter, filter_with};
pub use generator::{
    DEFAULT_RECORD_COUNT, DatasetGenerator, JOIN_WINDOW_DAYS, SALARY_FLOOR, SALARY_SPAN, generate,
    generate_dataset,
};
pub use loader::{DEFAULT_LOAD_DELAY, Dataset, DatasetLoader, DelaySleeper, TokioSleeper};
pub use record::UserRecord;
pub use session::{SearchReport, SearchSession, SearchSummary};
