//! Fixed catalogues used to derive record fields from an id.
//!
//! Both lists are ordered; a record picks the entry at `id mod len`, so the
//! order here is part of the data contract.

/// Email domains, indexed by `id mod 5`.
pub const DOMAINS: [&str; 5] = [
    "gmail.com",
    "yahoo.com",
    "outlook.com",
    "company.com",
    "example.org",
];

/// Departments, indexed by `id mod 8`.
pub const DEPARTMENTS: [&str; 8] = [
    "Engineering",
    "Marketing",
    "Sales",
    "HR",
    "Finance",
    "Product",
    "Design",
    "Operations",
];

/// Number of distinct last names produced by the generator.
pub const LAST_NAME_VARIANTS: u32 = 100;

/// Returns the email domain assigned to `id`.
///
/// # Examples
///
/// ```
/// use user_directory::domain_for;
///
/// assert_eq!(domain_for(1), "yahoo.com");
/// assert_eq!(domain_for(5), "gmail.com");
/// ```
#[must_use]
pub fn domain_for(id: u32) -> &'static str {
    pick(&DOMAINS, id)
}

/// Returns the department assigned to `id`.
///
/// # Examples
///
/// ```
/// use user_directory::department_for;
///
/// assert_eq!(department_for(8), "Engineering");
/// assert_eq!(department_for(3), "HR");
/// ```
#[must_use]
pub fn department_for(id: u32) -> &'static str {
    pick(&DEPARTMENTS, id)
}

fn pick(items: &[&'static str], id: u32) -> &'static str {
    let len = u32::try_from(items.len()).unwrap_or(u32::MAX);
    let index = usize::try_from(id.checked_rem(len).unwrap_or(0)).unwrap_or(0);
    items.get(index).copied().unwrap_or_default()
}
