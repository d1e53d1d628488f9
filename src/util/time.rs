//! Time helpers: worked-hours formatting and day boundaries for validation.

use chrono::{Local, NaiveDate};

pub fn start_of_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Formats a minute count the way the attendance screens display it.
pub fn format_hours(minutes: i64) -> String {
    let m = minutes.max(0);
    format!("{}h {}m", m / 60, m % 60)
}
