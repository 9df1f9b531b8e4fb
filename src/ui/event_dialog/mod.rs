//! Event create/edit dialog model.
//!
//! Holds form field values independent of any widget toolkit; the
//! presentation surface binds its inputs to these fields.

mod state;

pub use state::EventDialogState;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::category::EventCategory;
    use crate::models::event::{Event, EventDraft, EventId, EventValidationError};
    use crate::models::settings::CalendarConfig;
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 14).unwrap()
    }

    #[test]
    fn test_new_event_uses_config_defaults() {
        let config = CalendarConfig {
            default_category: EventCategory::Work,
            ..CalendarConfig::default()
        };
        let dialog = EventDialogState::new_event(date(), &config);

        assert_eq!(dialog.date, date());
        assert_eq!(dialog.category, EventCategory::Work);
        assert_eq!(dialog.color, "#3b82f6");
        assert!(!dialog.is_editing());
        assert!(!dialog.shows_delete());
        assert_eq!(dialog.heading(), "Add event");
    }

    #[test]
    fn test_from_event_prefills_fields() {
        let event = Event::from_draft(
            EventDraft::new("Dinner", date())
                .time("19:30")
                .description("Table for two")
                .category(EventCategory::Important),
            EventId::new("42"),
        );
        let dialog = EventDialogState::from_event(&event);

        assert_eq!(dialog.event_id, Some(EventId::new("42")));
        assert_eq!(dialog.time, "19:30");
        assert_eq!(dialog.description, "Table for two");
        assert!(dialog.shows_delete());
        assert_eq!(dialog.heading(), "Edit event");
    }

    #[test]
    fn test_live_title_validation() {
        let mut dialog = EventDialogState::new_event(date(), &CalendarConfig::default());

        dialog.set_title("   ");
        assert!(dialog.title_error);

        dialog.set_title("Lunch");
        assert!(!dialog.title_error);
    }

    #[test]
    fn test_draft_trims_and_drops_blank_optionals() {
        let mut dialog = EventDialogState::new_event(date(), &CalendarConfig::default());
        dialog.title = "  Lunch ".to_string();
        dialog.description = "   ".to_string();

        let draft = dialog.to_draft().unwrap();
        assert_eq!(draft.title, "Lunch");
        assert!(draft.time.is_none());
        assert!(draft.description.is_none());
    }

    #[test]
    fn test_bad_time_is_reported() {
        let mut dialog = EventDialogState::new_event(date(), &CalendarConfig::default());
        dialog.title = "Lunch".to_string();
        dialog.time = "noon".to_string();

        assert_eq!(
            dialog.to_draft(),
            Err(EventValidationError::InvalidTime("noon".to_string()))
        );
    }

    #[test]
    fn test_patch_carries_every_field() {
        let mut dialog = EventDialogState::new_event(date(), &CalendarConfig::default());
        dialog.event_id = Some(EventId::new("1"));
        dialog.title = "Lunch".to_string();

        let patch = dialog.to_patch().unwrap();
        assert_eq!(patch.title.as_deref(), Some("Lunch"));
        assert_eq!(patch.date, Some(date()));
        assert_eq!(patch.time, Some(None));
        assert_eq!(patch.category, Some(EventCategory::Personal));
    }
}
