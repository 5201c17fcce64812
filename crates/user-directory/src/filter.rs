//! Linear substring search over user records.
//!
//! A record matches when the lowercased query occurs in any of its name,
//! email, department, ISO join date, or decimal salary. Blank queries match
//! everything. Results keep the input order.

use crate::record::UserRecord;

/// A normalised search query.
///
/// The query keeps its inner whitespace; only the blank check trims.
///
/// # Examples
///
/// ```
/// use user_directory::SearchQuery;
///
/// assert!(SearchQuery::new("   ").is_blank());
/// assert!(SearchQuery::from_optional(None).is_blank());
/// assert_eq!(SearchQuery::new("ENGINEERING").as_str(), "engineering");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
    blank: bool,
}

impl SearchQuery {
    /// Builds a query from raw user input.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self {
            needle: raw.to_lowercase(),
            blank: raw.trim().is_empty(),
        }
    }

    /// Builds a query, treating absent input as the empty string.
    #[must_use]
    pub fn from_optional(raw: Option<&str>) -> Self {
        Self::new(raw.unwrap_or_default())
    }

    /// Returns `true` when the query is empty or whitespace-only.
    #[must_use]
    pub const fn is_blank(&self) -> bool {
        self.blank
    }

    /// Returns the lowercased query text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.needle
    }

    /// Returns `true` when `record` passes this query.
    #[must_use]
    pub fn matches(&self, record: &UserRecord) -> bool {
        if self.blank {
            return true;
        }
        let needle = self.needle.as_str();
        record.name.to_lowercase().contains(needle)
            || record.email.to_lowercase().contains(needle)
            || record.department.to_lowercase().contains(needle)
            || record.join_date_iso().contains(needle)
            || record.salary.to_string().contains(needle)
    }
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self::new("")
    }
}

impl From<&str> for SearchQuery {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// Returns the records matching `query`, in their original order.
///
/// # Example
///
/// ```
/// use user_directory::{filter, generate};
///
/// let records = generate(20);
/// let hits = filter(&records, "FIRSTNAME1 ");
///
/// let ids: Vec<u32> = hits.iter().map(|r| r.id).collect();
/// assert_eq!(ids, [1]);
/// ```
#[must_use]
pub fn filter<'a>(records: &'a [UserRecord], query: &str) -> Vec<&'a UserRecord> {
    filter_with(records, &SearchQuery::new(query))
}

/// Returns the records matching a prepared query, in their original order.
#[must_use]
pub fn filter_with<'a>(records: &'a [UserRecord], query: &SearchQuery) -> Vec<&'a UserRecord> {
    records.iter().filter(|record| query.matches(record)).collect()
}
