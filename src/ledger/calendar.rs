//! Calendar-month arithmetic shared by investment valuation and projection.

use chrono::Datelike;

/// Zero-based month counter since year 0, comparable across years.
pub fn month_index(date: &impl Datelike) -> i32 {
    date.year() * 12 + date.month() as i32 - 1
}

/// Whole calendar months from `from` to `to`, ignoring the day of month.
///
/// Negative when `to` falls in an earlier month than `from`.
pub fn months_between(from: &impl Datelike, to: &impl Datelike) -> i32 {
    month_index(to) - month_index(from)
}

/// Compounds `principal` once per month at `rate` for `months` periods.
pub fn compound(principal: f64, rate: f64, months: i32) -> f64 {
    principal * (1.0 + rate).powf(f64::from(months))
}
