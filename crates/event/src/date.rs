//! Event date formatting.

use chrono::NaiveDate;

/// Day/month/year, zero-padded (`05/01/2005`).
pub const DATE_FORMAT: &str = "%d/%m/%Y";

pub fn format_event_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
