//! Display helpers shared by the pages that render records.

use chrono::{DateTime, NaiveDate, Utc};

/// Formats a price with exactly two decimals: `12.5` becomes `"12.50"`.
#[must_use]
pub fn format_price(price: f64) -> String {
    format!("{price:.2}")
}

/// Long-form date, e.g. `"March 15, 2022"`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Timestamp as shown in the admin inbox, in UTC: `"May 15, 2023 at 09:05"`.
#[must_use]
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%B %-d, %Y at %H:%M").to_string()
}

/// URL slug derived from a title.
///
/// Lower-cases, turns whitespace runs into a single `-`, then drops every
/// character outside `[a-z0-9-]`.
#[must_use]
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut in_space = false;

    for c in lowered.chars() {
        if c.is_whitespace() {
            if !in_space {
                slug.push('-');
            }
            in_space = true;
            continue;
        }
        in_space = false;
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
            slug.push(c);
        }
    }
    slug
}
