//! Display formatting for listing fields.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, NaiveDate};

/// Render an API expiry value as `d/m/yyyy`.
///
/// Accepts RFC 3339 timestamps and plain `yyyy-mm-dd` dates; anything else is
/// shown verbatim.
pub fn format_expiry_date(raw: &str) -> String {
    let raw = raw.trim();
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .or_else(|_| NaiveDate::parse_from_str(raw.get(..10).unwrap_or(raw), "%Y-%m-%d"));
    match date {
        Ok(date) => date.format("%-d/%-m/%Y").to_string(),
        Err(_) => raw.to_owned(),
    }
}

pub fn price_label(price: &str) -> String {
    format!("Price: ₹{price}")
}

pub fn mailto_href(email: &str) -> String {
    format!("mailto:{email}")
}
