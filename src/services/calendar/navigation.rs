use chrono::{Datelike, Month, NaiveDate};

use super::CalendarError;
use crate::utils::date::shift_month;

/// The year/month currently shown in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayedMonth {
    year: i32,
    month: u32,
}

impl DisplayedMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth(month));
        }
        NaiveDate::from_ymd_opt(year, month, 1).ok_or(CalendarError::YearOutOfRange(year))?;
        Ok(Self { year, month })
    }

    /// The month a date falls in; used for "jump to today".
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Step by whole months, rolling the year as needed.
    ///
    /// Fails when the target month cannot be rendered, so a shown month is
    /// always one `render_month` accepts.
    pub fn shift(self, delta_months: i32) -> Result<Self, CalendarError> {
        let (year, month) = shift_month(self.year, self.month, delta_months)
            .ok_or(CalendarError::ShiftOutOfRange(delta_months))?;
        Self::new(year, month)
    }

    pub fn next(self) -> Result<Self, CalendarError> {
        self.shift(1)
    }

    pub fn previous(self) -> Result<Self, CalendarError> {
        self.shift(-1)
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Header text such as "October 2026".
    pub fn label(&self) -> String {
        let name = u8::try_from(self.month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map(|m| m.name())
            .unwrap_or("Unknown");
        format!("{} {}", name, self.year)
    }
}
