//! Month grid generation.
//!
//! Maps a year/month onto whole Monday-first weeks of day cells, padding
//! with trailing days of the previous month and leading days of the next,
//! and attaches each day's events in display order. Rendering only borrows
//! events; nothing is mutated.

use std::cmp::Ordering;

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

use crate::models::event::Event;
use crate::services::event::EventStore;
use crate::services::storage::KeyValueStore;
use crate::utils::date::{days_in_month, format_date, monday_offset, shift_month};

mod navigation;

pub use navigation::DisplayedMonth;

/// Column headers for a Monday-first week.
pub const WEEKDAY_HEADERS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Invalid month {0} (expected 1-12)")]
    InvalidMonth(u32),

    #[error("Year {0} is outside the supported range")]
    YearOutOfRange(i32),

    #[error("Cannot move {0} months from the displayed month")]
    ShiftOutOfRange(i32),
}

/// Anything the renderer can ask for a day's events.
pub trait EventLookup {
    fn events_on(&self, date: NaiveDate) -> Vec<&Event>;
}

impl<S: KeyValueStore> EventLookup for EventStore<S> {
    fn events_on(&self, date: NaiveDate) -> Vec<&Event> {
        self.find_by_date(date)
    }
}

impl EventLookup for [Event] {
    fn events_on(&self, date: NaiveDate) -> Vec<&Event> {
        self.iter().filter(|e| e.date == date).collect()
    }
}

/// One grid square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell<'a> {
    pub date: NaiveDate,
    pub in_current_month: bool,
    pub is_today: bool,
    /// Sorted by time, untimed events last.
    pub events: Vec<&'a Event>,
}

impl DayCell<'_> {
    /// `YYYY-MM-DD` form of the cell's date.
    pub fn date_key(&self) -> String {
        format_date(self.date)
    }

    pub fn day_number(&self) -> u32 {
        self.date.day()
    }
}

/// A rendered month: whole weeks of cells, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid<'a> {
    pub year: i32,
    pub month: u32,
    /// Cells before the 1st that belong to the previous month.
    pub leading_days: u32,
    pub days_in_month: u32,
    pub cells: Vec<DayCell<'a>>,
}

impl<'a> MonthGrid<'a> {
    pub fn weeks(&self) -> std::slice::Chunks<'_, DayCell<'a>> {
        self.cells.chunks(7)
    }

    pub fn week_count(&self) -> usize {
        self.cells.len() / 7
    }

    pub fn cell_for(&self, date: NaiveDate) -> Option<&DayCell<'a>> {
        self.cells.iter().find(|c| c.date == date)
    }
}

/// Build the grid for `month` (1-12) of `year`, flagging `today`.
pub fn render_month<'a, L>(
    year: i32,
    month: u32,
    events: &'a L,
    today: NaiveDate,
) -> Result<MonthGrid<'a>, CalendarError>
where
    L: EventLookup + ?Sized,
{
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth(month));
    }
    let first_of_month =
        NaiveDate::from_ymd_opt(year, month, 1).ok_or(CalendarError::YearOutOfRange(year))?;
    let month_days = days_in_month(year, month).ok_or(CalendarError::YearOutOfRange(year))?;

    let (prev_year, prev_month) =
        shift_month(year, month, -1).ok_or(CalendarError::YearOutOfRange(year))?;
    let (next_year, next_month) =
        shift_month(year, month, 1).ok_or(CalendarError::YearOutOfRange(year))?;
    let days_in_prev_month =
        days_in_month(prev_year, prev_month).ok_or(CalendarError::YearOutOfRange(year))?;

    let leading_days = monday_offset(first_of_month);
    let total_cells = (leading_days + month_days).div_ceil(7) * 7;

    let today_key = format_date(today);

    let mut cells = Vec::with_capacity(total_cells as usize);
    for index in 0..total_cells {
        let (date, in_current_month) = if index < leading_days {
            let day = days_in_prev_month - leading_days + index + 1;
            (NaiveDate::from_ymd_opt(prev_year, prev_month, day), false)
        } else if index >= leading_days + month_days {
            let day = index - leading_days - month_days + 1;
            (NaiveDate::from_ymd_opt(next_year, next_month, day), false)
        } else {
            let day = index - leading_days + 1;
            (NaiveDate::from_ymd_opt(year, month, day), true)
        };
        let date = date.ok_or(CalendarError::YearOutOfRange(year))?;

        let mut day_events = events.events_on(date);
        sort_day_events(&mut day_events);

        cells.push(DayCell {
            date,
            in_current_month,
            is_today: format_date(date) == today_key,
            events: day_events,
        });
    }

    Ok(MonthGrid {
        year,
        month,
        leading_days,
        days_in_month: month_days,
        cells,
    })
}

/// Order a day's events by time; untimed events go last, ties keep store order.
pub fn sort_day_events(events: &mut [&Event]) {
    events.sort_by(|a, b| compare_by_time(a, b));
}

fn compare_by_time(a: &Event, b: &Event) -> Ordering {
    match (&a.time, &b.time) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
