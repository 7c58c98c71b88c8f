//! Year progress arithmetic.
//!
//! A [`CalendarSnapshot`] captures how far into its year a given date is:
//! the ordinal day, how many days remain, and the elapsed share as a
//! percentage.  Snapshots are plain values, recomputed from the wall clock
//! on every redraw.
//!
//! [`classify_dot`] maps a day of the year onto a [`DotState`] relative to
//! today, which the scene uses to pick a fill colour for each grid dot.

use chrono::Datelike;

/// Whether `year` is a Gregorian leap year.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `year` (365 or 366).
pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Progress through the year for a single date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarSnapshot {
    /// Calendar year of the date.
    pub year: i32,
    /// Days in that year, 365 or 366.
    pub total_days: u32,
    /// Ordinal day, January 1 = 1.
    pub day_of_year: u32,
    /// `total_days - day_of_year`.
    pub days_left: u32,
    /// `day_of_year / total_days * 100`, in `(0, 100]`.
    pub progress_percent: f64,
}

/// Compute the year progress for `now`.
///
/// Accepts anything chrono considers a date: a zoned `DateTime`, a
/// `NaiveDateTime` or a bare `NaiveDate`.  Only the calendar date matters;
/// the time of day is ignored.
pub fn compute_snapshot<D: Datelike>(now: &D) -> CalendarSnapshot {
    let year = now.year();
    let total_days = days_in_year(year);
    let day_of_year = now.ordinal();
    CalendarSnapshot {
        year,
        total_days,
        day_of_year,
        days_left: total_days - day_of_year,
        progress_percent: f64::from(day_of_year) / f64::from(total_days) * 100.0,
    }
}

/// Where a day sits relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DotState {
    /// Already elapsed.
    Past,
    /// Today.
    Current,
    /// Still ahead.
    Future,
}

/// Classify `day_number` (1-indexed) against `current_day_of_year`.
pub fn classify_dot(day_number: u32, current_day_of_year: u32) -> DotState {
    use std::cmp::Ordering;
    match day_number.cmp(&current_day_of_year) {
        Ordering::Less => DotState::Past,
        Ordering::Equal => DotState::Current,
        Ordering::Greater => DotState::Future,
    }
}

//  Tests
