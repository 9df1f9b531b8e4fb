//! Confirmation prompts for destructive actions.

use crate::models::event::EventId;

/// Types of confirmation dialogs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    /// Delete an event by ID
    DeleteEvent {
        event_id: EventId,
        event_title: String,
    },
}

impl ConfirmAction {
    /// Get the dialog title for this action
    pub fn title(&self) -> &'static str {
        match self {
            ConfirmAction::DeleteEvent { .. } => "Delete Event",
        }
    }

    /// Get the confirmation message for this action
    pub fn message(&self) -> String {
        match self {
            ConfirmAction::DeleteEvent { event_title, .. } => {
                format!(
                    "Are you sure you want to delete \"{}\"?\n\nThis action cannot be undone.",
                    event_title
                )
            }
        }
    }

    /// Get the confirm button text for this action
    pub fn confirm_text(&self) -> &'static str {
        match self {
            ConfirmAction::DeleteEvent { .. } => "Delete",
        }
    }
}
