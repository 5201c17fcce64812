//! User record value type.
//!
//! Records are immutable once generated. The serialized shape uses camelCase
//! keys and an ISO 8601 date-only `joinDate`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A synthetic user entry in the directory.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use user_directory::UserRecord;
///
/// let record = UserRecord {
///     id: 1,
///     name: "FirstName1 LastName1".to_owned(),
///     email: "firstname1.lastname1@yahoo.com".to_owned(),
///     department: "Marketing".to_owned(),
///     salary: 123_456,
///     join_date: NaiveDate::from_ymd_opt(2022, 5, 1).expect("valid date"),
/// };
///
/// assert_eq!(record.join_date_iso(), "2022-05-01");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Stable identifier, contiguous from 1.
    pub id: u32,
    /// Full name in `FirstName{id} LastName{id mod 100}` form.
    pub name: String,
    /// Lowercased email derived from the name.
    pub email: String,
    /// Department taken from the fixed catalogue.
    pub department: String,
    /// Annual salary in whole units.
    pub salary: u32,
    /// Day the user joined.
    pub join_date: NaiveDate,
}

impl UserRecord {
    /// Returns the join date formatted as `YYYY-MM-DD`.
    #[must_use]
    pub fn join_date_iso(&self) -> String {
        self.join_date.format("%Y-%m-%d").to_string()
    }
}
