// Date utility functions
// Calendar-day arithmetic shared by the store, the renderer and the adapter

use chrono::{Datelike, Local, NaiveDate};

/// Wire and comparison format for calendar days.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a date as zero-padded `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` string. Anything else yields `None`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    // Reject unpadded forms like 2024-2-3 so string equality stays meaningful
    if value.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Current local calendar day.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Number of days in `month` (1-12) of `year`, or `None` for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let (next_year, next_month) = if month == 12 {
        (year.checked_add(1)?, 1)
    } else {
        (year, month + 1)
    };
    let first_of_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)?;
    // Guards month == 0, which from_ymd_opt(year, 1, 1) above would accept
    NaiveDate::from_ymd_opt(year, month, 1)?;
    first_of_next.pred_opt().map(|last| last.day())
}

/// Days between the previous Monday (inclusive) and `date`: Monday 0 .. Sunday 6.
pub fn monday_offset(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_monday()
}

/// Move `(year, month)` by `delta_months`, rolling the year over and under.
///
/// Returns `None` when the month index would overflow `i32`.
pub fn shift_month(year: i32, month: u32, delta_months: i32) -> Option<(i32, u32)> {
    let month_index = i32::try_from(month).ok()?.checked_sub(1)?;
    let total_months = year
        .checked_mul(12)?
        .checked_add(month_index)?
        .checked_add(delta_months)?;
    let new_year = total_months.div_euclid(12);
    let new_month = total_months.rem_euclid(12) + 1;
    Some((new_year, new_month as u32))
}

/// Check a clock time in `HH:MM` 24-hour form.
pub fn is_valid_time(value: &str) -> bool {
    let Some((hours, minutes)) = value.split_once(':') else {
        return false;
    };
    if hours.len() != 2 || minutes.len() != 2 {
        return false;
    }
    match (hours.parse::<u32>(), minutes.parse::<u32>()) {
        (Ok(h), Ok(m)) => h < 24 && m < 60,
        _ => false,
    }
}
