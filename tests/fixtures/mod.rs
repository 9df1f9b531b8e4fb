// Test fixtures - reusable test data
// Provides consistent test data across all test files

#![allow(dead_code)]

use chrono::NaiveDate;
use month_planner::models::category::EventCategory;
use month_planner::models::event::EventDraft;

/// Route log output through the test harness once per binary.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Returns Jan 1, 2025
    pub fn jan_1_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    /// Returns Feb 14, 2025 (Valentine's Day)
    pub fn valentine_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 14).unwrap()
    }

    /// Returns Dec 31, 2025 (New Year's Eve)
    pub fn new_years_eve_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
    }

    /// Returns Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }
}

/// Sample event drafts for testing
pub mod events {
    use super::*;

    /// Untimed personal event with defaults everywhere
    pub fn simple_event() -> EventDraft {
        EventDraft::new("Simple Event", dates::jan_1_2025())
    }

    /// Morning work meeting
    pub fn morning_standup() -> EventDraft {
        EventDraft::new("Team Standup", dates::valentine_2025())
            .time("09:00")
            .category(EventCategory::Work)
            .color("#10b981")
    }

    /// Evening dinner with a description
    pub fn valentine_dinner() -> EventDraft {
        EventDraft::new("Dinner", dates::valentine_2025())
            .time("19:30")
            .description("Table for two at 7:30")
            .category(EventCategory::Important)
            .color("#ef4444")
    }

    /// Untimed reminder on the same day as the others
    pub fn valentine_reminder() -> EventDraft {
        EventDraft::new("Buy flowers", dates::valentine_2025())
    }

    /// Event on a leap day
    pub fn leap_day_party() -> EventDraft {
        EventDraft::new("Leap Day Party", dates::leap_day_2024()).time("20:00")
    }

    /// Event on the last day of the year
    pub fn new_years_eve() -> EventDraft {
        EventDraft::new("Countdown", dates::new_years_eve_2025()).time("23:59")
    }
}
