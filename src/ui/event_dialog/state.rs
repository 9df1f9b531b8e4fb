use crate::models::category::EventCategory;
use crate::models::event::{Event, EventDraft, EventId, EventPatch, EventValidationError};
use crate::models::settings::CalendarConfig;
use chrono::NaiveDate;

/// State for the event editing dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDialogState {
    /// Set when editing an existing event
    pub event_id: Option<EventId>,
    pub title: String,
    pub date: NaiveDate,
    /// Empty means no time
    pub time: String,
    pub description: String,
    pub category: EventCategory,
    pub color: String,
    /// Inline error flag on the title field
    pub title_error: bool,
    /// Form-level error from validation of other fields
    pub error_message: Option<String>,
}

impl EventDialogState {
    pub fn new_event(date: NaiveDate, config: &CalendarConfig) -> Self {
        Self {
            event_id: None,
            title: String::new(),
            date,
            time: String::new(),
            description: String::new(),
            category: config.default_category,
            color: config.default_color.clone(),
            title_error: false,
            error_message: None,
        }
    }

    pub fn from_event(event: &Event) -> Self {
        Self {
            event_id: Some(event.id.clone()),
            title: event.title.clone(),
            date: event.date,
            time: event.time.clone().unwrap_or_default(),
            description: event.description.clone().unwrap_or_default(),
            category: event.category,
            color: event.color.clone(),
            title_error: false,
            error_message: None,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.event_id.is_some()
    }

    /// Dialog heading text.
    pub fn heading(&self) -> &'static str {
        if self.is_editing() {
            "Edit event"
        } else {
            "Add event"
        }
    }

    /// Whether the dialog offers a delete button.
    pub fn shows_delete(&self) -> bool {
        self.is_editing()
    }

    /// Replace the title and re-check it, as the field is typed into.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.validate_title();
    }

    /// Flag the title field when it is blank. Returns true when valid.
    pub fn validate_title(&mut self) -> bool {
        self.title_error = self.title.trim().is_empty();
        !self.title_error
    }

    pub fn to_draft(&self) -> Result<EventDraft, EventValidationError> {
        let draft = EventDraft::new(self.title.trim(), self.date)
            .time(self.time.trim())
            .description(self.description.trim())
            .category(self.category)
            .color(self.color.clone());
        draft.validate()?;
        Ok(draft)
    }

    /// Every form field as a patch, the way a submitted edit form sends them.
    pub fn to_patch(&self) -> Result<EventPatch, EventValidationError> {
        let patch = EventPatch::new()
            .title(self.title.trim())
            .date(self.date)
            .time(self.time.trim())
            .description(self.description.trim())
            .category(self.category)
            .color(self.color.clone());
        patch.validate()?;
        Ok(patch)
    }
}
