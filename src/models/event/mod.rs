// Event module
// Dated calendar entry plus the draft/patch shapes used to create and edit it

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::models::category::{is_valid_hex_color, EventCategory};
use crate::utils::date::is_valid_time;

/// Color given to events created without an explicit one.
pub const DEFAULT_EVENT_COLOR: &str = "#3b82f6";

/// Unique identifier of an event within its store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EventId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for EventId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A single calendar entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub date: NaiveDate,
    /// Clock time as `HH:MM`; compares lexicographically.
    pub time: Option<String>,
    pub description: Option<String>,
    pub category: EventCategory,
    pub color: String,
}

impl Event {
    /// Build an event from a validated draft, using `id` when the draft has none.
    pub(crate) fn from_draft(draft: EventDraft, id: EventId) -> Self {
        Self {
            id: draft.id.unwrap_or(id),
            title: draft.title,
            date: draft.date,
            time: draft.time,
            description: draft.description,
            category: draft.category.unwrap_or_default(),
            color: draft
                .color
                .unwrap_or_else(|| DEFAULT_EVENT_COLOR.to_string()),
        }
    }

    /// Apply only the fields present in `patch`.
    pub fn apply(&mut self, patch: EventPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(time) = patch.time {
            self.time = time;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
    }

    pub fn has_time(&self) -> bool {
        self.time.is_some()
    }
}

/// Validation errors for event input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EventValidationError {
    #[error("Event title cannot be empty")]
    EmptyTitle,

    #[error("Invalid time '{0}' (use HH:MM)")]
    InvalidTime(String),

    #[error("Invalid color '{0}' (use hex like #3b82f6)")]
    InvalidColor(String),
}

/// Data for a new event. Missing optional fields get defaults on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub id: Option<EventId>,
    pub title: String,
    pub date: NaiveDate,
    pub time: Option<String>,
    pub description: Option<String>,
    pub category: Option<EventCategory>,
    pub color: Option<String>,
}

impl EventDraft {
    /// Start a draft with the two required fields.
    ///
    /// # Examples
    /// ```
    /// use month_planner::models::event::EventDraft;
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 2, 14).unwrap();
    /// let draft = EventDraft::new("Dinner", date).time("19:30");
    /// assert!(draft.validate().is_ok());
    /// ```
    pub fn new(title: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: None,
            title: title.into(),
            date,
            time: None,
            description: None,
            category: None,
            color: None,
        }
    }

    /// Use a caller-chosen identifier instead of a generated one.
    pub fn id(mut self, id: impl Into<EventId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn time(mut self, time: impl Into<String>) -> Self {
        self.time = non_empty(time.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = non_empty(description.into());
        self
    }

    pub fn category(mut self, category: EventCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Trim text fields and check title, time and color.
    pub fn validate(&self) -> Result<(), EventValidationError> {
        validate_title(&self.title)?;
        if let Some(time) = &self.time {
            validate_time(time)?;
        }
        if let Some(color) = &self.color {
            validate_color(color)?;
        }
        Ok(())
    }

    /// Validate and normalize whitespace, ready for insertion.
    pub(crate) fn normalized(mut self) -> Result<Self, EventValidationError> {
        self.title = self.title.trim().to_string();
        self.time = self.time.and_then(|t| non_empty(t.trim().to_string()));
        self.description = self
            .description
            .and_then(|d| non_empty(d.trim().to_string()));
        self.validate()?;
        Ok(self)
    }
}

/// Partial update for an existing event; `None` leaves a field untouched.
///
/// For `time` and `description`, `Some(None)` clears the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventPatch {
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub category: Option<EventCategory>,
    pub color: Option<String>,
}

impl EventPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Set the time; an empty string clears it.
    pub fn time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(non_empty(time.into()));
        self
    }

    /// Set the description; an empty string clears it.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(non_empty(description.into()));
        self
    }

    pub fn category(mut self, category: EventCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn validate(&self) -> Result<(), EventValidationError> {
        if let Some(title) = &self.title {
            validate_title(title)?;
        }
        if let Some(Some(time)) = &self.time {
            validate_time(time)?;
        }
        if let Some(color) = &self.color {
            validate_color(color)?;
        }
        Ok(())
    }

    pub(crate) fn normalized(mut self) -> Result<Self, EventValidationError> {
        self.title = self.title.map(|t| t.trim().to_string());
        self.time = self
            .time
            .map(|t| t.and_then(|t| non_empty(t.trim().to_string())));
        self.description = self
            .description
            .map(|d| d.and_then(|d| non_empty(d.trim().to_string())));
        self.validate()?;
        Ok(self)
    }
}

fn validate_title(title: &str) -> Result<(), EventValidationError> {
    if title.trim().is_empty() {
        return Err(EventValidationError::EmptyTitle);
    }
    Ok(())
}

fn validate_time(time: &str) -> Result<(), EventValidationError> {
    if !is_valid_time(time.trim()) {
        return Err(EventValidationError::InvalidTime(time.to_string()));
    }
    Ok(())
}

fn validate_color(color: &str) -> Result<(), EventValidationError> {
    if !is_valid_hex_color(color) {
        return Err(EventValidationError::InvalidColor(color.to_string()));
    }
    Ok(())
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
