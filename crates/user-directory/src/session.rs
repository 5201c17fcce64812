//! Search session over a published directory.
//!
//! The session re-runs the filter for every query it receives and reports how
//! many records matched and how long the scan took. It caches nothing.

use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::debug;

use crate::filter::{SearchQuery, filter_with};
use crate::loader::Dataset;
use crate::record::UserRecord;

/// Outcome of one search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport<'a> {
    /// Raw query text as supplied by the caller.
    pub query: String,
    /// Matching records in directory order.
    pub results: Vec<&'a UserRecord>,
    /// Time spent scanning the directory.
    pub elapsed: Duration,
}

impl SearchReport<'_> {
    /// Returns the number of matching records.
    #[must_use]
    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    /// Builds a serialisable summary holding at most `limit` records.
    #[must_use]
    pub fn summary(&self, limit: usize) -> SearchSummary<'_> {
        SearchSummary {
            query: &self.query,
            result_count: self.result_count(),
            filter_micros: u64::try_from(self.elapsed.as_micros()).unwrap_or(u64::MAX),
            results: self.results.iter().take(limit).copied().collect(),
        }
    }
}

/// JSON view of a [`SearchReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchSummary<'a> {
    /// Raw query text.
    pub query: &'a str,
    /// Total number of matches, before truncation.
    pub result_count: usize,
    /// Filter duration in microseconds.
    pub filter_micros: u64,
    /// Leading matches.
    pub results: Vec<&'a UserRecord>,
}

/// Holds a published directory and answers queries against it.
///
/// # Example
///
/// ```
/// use user_directory::{SearchSession, generate};
///
/// let session = SearchSession::new(generate(50).into());
/// let report = session.search("Engineering");
///
/// assert!(report.results.iter().all(|r| r.department == "Engineering"));
/// assert_eq!(session.search("").result_count(), 50);
/// ```
#[derive(Debug, Clone)]
pub struct SearchSession {
    dataset: Dataset,
}

impl SearchSession {
    /// Wraps a published directory.
    #[must_use]
    pub const fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }

    /// Returns the directory being searched.
    #[must_use]
    pub fn records(&self) -> &[UserRecord] {
        &self.dataset
    }

    /// Filters the directory for `query` and times the scan.
    #[must_use]
    pub fn search(&self, query: &str) -> SearchReport<'_> {
        let prepared = SearchQuery::new(query);
        let started = Instant::now();
        let results = filter_with(&self.dataset, &prepared);
        let elapsed = started.elapsed();

        debug!(
            query_len = query.len(),
            result_count = results.len(),
            elapsed_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX),
            "filter operation completed"
        );

        SearchReport {
            query: query.to_owned(),
            results,
            elapsed,
        }
    }
}
