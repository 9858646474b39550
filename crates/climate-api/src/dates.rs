//! Date parsing and calendar arithmetic for the query endpoints.
//!
//! Parsing is deliberately strict: ISO `YYYY-MM-DD` first, then a small
//! fixed set of fallback formats. Anything else is rejected so the
//! validation behavior stays deterministic.

use chrono::{Months, NaiveDate};

/// Canonical date format used in the dataset.
pub const ISO_FORMAT: &str = "%Y-%m-%d";

/// Accepted besides ISO. Kept short on purpose.
const FALLBACK_FORMATS: &[&str] = &["%Y/%m/%d", "%Y%m%d", "%B %d, %Y", "%b %d %Y"];

/// Parse a date-like string from a request path.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, ISO_FORMAT)
        .ok()
        .or_else(|| {
            FALLBACK_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        })
}

/// Calendar-aware one-year subtraction.
///
/// Uses month arithmetic rather than a 365-day offset, so Feb 29 on a
/// leap year maps to Feb 28 of the previous year (chrono clamps to the
/// last valid day of the month).
pub fn one_year_before(date: NaiveDate) -> NaiveDate {
    date.checked_sub_months(Months::new(12))
        .unwrap_or(NaiveDate::MIN)
}

/// Format a date back into the dataset's ISO string form.
pub fn to_iso(date: NaiveDate) -> String {
    date.format(ISO_FORMAT).to_string()
}
