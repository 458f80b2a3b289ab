//! Competition registration eligibility checks.
//!
//! A user cannot register for competitions while required profile fields
//! are missing. The full reason list backs the profile screen; the
//! notification layer only consumes presence/absence.

use chrono::NaiveDate;

/// Profile is missing a name.
pub const BLOCKER_MISSING_NAME: &str = "Need a name";

/// Profile is missing a date of birth.
pub const BLOCKER_MISSING_BIRTHDATE: &str = "Need a birthdate";

/// Profile is missing a gender.
pub const BLOCKER_MISSING_GENDER: &str = "Need a gender";

/// Profile is missing a country.
pub const BLOCKER_MISSING_COUNTRY: &str = "Need a country";

/// Collect every reason the given profile fields block registration.
///
/// Returns an empty vector for a complete profile. Whitespace-only values
/// count as missing.
pub fn registration_blockers(
    name: &str,
    dob: Option<NaiveDate>,
    gender: Option<&str>,
    country_iso2: Option<&str>,
) -> Vec<&'static str> {
    let mut blockers = Vec::new();

    if name.trim().is_empty() {
        blockers.push(BLOCKER_MISSING_NAME);
    }
    if dob.is_none() {
        blockers.push(BLOCKER_MISSING_BIRTHDATE);
    }
    if gender.is_none_or(|g| g.trim().is_empty()) {
        blockers.push(BLOCKER_MISSING_GENDER);
    }
    if country_iso2.is_none_or(|c| c.trim().is_empty()) {
        blockers.push(BLOCKER_MISSING_COUNTRY);
    }

    blockers
}
