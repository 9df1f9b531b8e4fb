//! Adapter between a presentation surface and the calendar core.
//!
//! The surface forwards user intents to [`CalendarApp::handle`] and draws
//! whatever [`CalendarApp::view`] returns. All state lives here; nothing is
//! tied to a particular widget toolkit.

use chrono::NaiveDate;

use crate::models::event::EventId;
use crate::models::settings::CalendarConfig;
use crate::services::calendar::DisplayedMonth;
use crate::services::event::{EventStore, StoreError};
use crate::services::notification::{Toast, ToastSlot};
use crate::services::storage::{KeyValueStore, StorageError};
use crate::ui::clock::{Clock, SystemClock};
use crate::ui::event_dialog::EventDialogState;

mod confirm;
mod navigation;
mod view;

pub use confirm::ConfirmAction;
pub use view::MonthView;

/// User actions coming from the presentation surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiIntent {
    /// Empty part of a day cell clicked
    NewEventAt(NaiveDate),
    /// Event chip clicked
    EditEvent(EventId),
    /// Delete requested; asks for confirmation first
    DeleteEvent(EventId),
    ConfirmDelete,
    DismissConfirm,
    /// Title field changed
    TitleEdited(String),
    Submit,
    Cancel,
    /// Move the displayed month by this many months
    Navigate(i32),
    JumpToToday,
}

pub struct CalendarApp<S: KeyValueStore, C: Clock = SystemClock> {
    config: CalendarConfig,
    store: EventStore<S>,
    clock: C,
    displayed: DisplayedMonth,
    dialog: Option<EventDialogState>,
    confirm: Option<ConfirmAction>,
    toasts: ToastSlot,
}

impl<S: KeyValueStore, C: Clock> CalendarApp<S, C> {
    /// Open the store over `storage` and show the month containing today.
    ///
    /// Unreadable saved data leaves an empty calendar and an error toast.
    pub fn new(config: CalendarConfig, storage: S, clock: C) -> Self {
        let (store, loaded) = EventStore::open(storage, config.storage_key.clone());
        let mut toasts = ToastSlot::new(config.toast_duration());

        match loaded {
            Ok(count) => log::info!("Calendar ready with {} events", count),
            Err(err) => {
                log::error!("Starting with an empty calendar: {}", err);
                toasts.error("Failed to load events", clock.now());
            }
        }

        let displayed = DisplayedMonth::containing(clock.today());

        Self {
            config,
            store,
            clock,
            displayed,
            dialog: None,
            confirm: None,
            toasts,
        }
    }

    pub fn handle(&mut self, intent: UiIntent) {
        log::debug!("Handling {:?}", intent);
        match intent {
            UiIntent::NewEventAt(date) => self.open_new_event(date),
            UiIntent::EditEvent(id) => self.open_edit_event(&id),
            UiIntent::DeleteEvent(id) => self.request_delete(&id),
            UiIntent::ConfirmDelete => self.confirm_delete(),
            UiIntent::DismissConfirm => self.confirm = None,
            UiIntent::TitleEdited(title) => {
                if let Some(dialog) = self.dialog.as_mut() {
                    dialog.set_title(title);
                }
            }
            UiIntent::Submit => self.submit_dialog(),
            UiIntent::Cancel => {
                self.dialog = None;
                self.confirm = None;
            }
            UiIntent::Navigate(delta) => self.navigate(delta),
            UiIntent::JumpToToday => self.jump_to_today(),
        }
    }

    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    pub fn store(&self) -> &EventStore<S> {
        &self.store
    }

    pub fn displayed_month(&self) -> DisplayedMonth {
        self.displayed
    }

    pub fn dialog(&self) -> Option<&EventDialogState> {
        self.dialog.as_ref()
    }

    /// Form fields for the surface to bind its inputs to.
    pub fn dialog_mut(&mut self) -> Option<&mut EventDialogState> {
        self.dialog.as_mut()
    }

    pub fn pending_confirm(&self) -> Option<&ConfirmAction> {
        self.confirm.as_ref()
    }

    /// The toast to show right now, if any.
    pub fn toast(&self) -> Option<&Toast> {
        self.toasts.current(self.clock.now())
    }

    /// Drop an expired toast; call once per frame.
    pub fn tick(&mut self) {
        self.toasts.cleanup(self.clock.now());
    }

    /// Flush the store and hand back the storage backend.
    pub fn close(self) -> Result<S, StorageError> {
        self.store.close()
    }

    fn open_new_event(&mut self, date: NaiveDate) {
        self.confirm = None;
        self.dialog = Some(EventDialogState::new_event(date, &self.config));
    }

    fn open_edit_event(&mut self, id: &EventId) {
        match self.store.get(id) {
            Some(event) => {
                self.confirm = None;
                self.dialog = Some(EventDialogState::from_event(event));
            }
            None => log::debug!("Edit ignored, no event with id {}", id),
        }
    }

    fn request_delete(&mut self, id: &EventId) {
        if let Some(event) = self.store.get(id) {
            self.confirm = Some(ConfirmAction::DeleteEvent {
                event_id: event.id.clone(),
                event_title: event.title.clone(),
            });
        }
    }

    fn confirm_delete(&mut self) {
        let Some(ConfirmAction::DeleteEvent { event_id, .. }) = self.confirm.take() else {
            return;
        };

        if self
            .dialog
            .as_ref()
            .is_some_and(|d| d.event_id.as_ref() == Some(&event_id))
        {
            self.dialog = None;
        }

        match self.store.remove(&event_id) {
            Ok(true) => self.toasts.success("Event deleted", self.clock.now()),
            Ok(false) => {}
            Err(err) => self.report_save_failure(&err),
        }
    }

    fn submit_dialog(&mut self) {
        let Some(dialog) = self.dialog.as_mut() else {
            return;
        };
        if !dialog.validate_title() {
            log::debug!("Submit rejected, title is empty");
            return;
        }

        let result = match dialog.event_id.clone() {
            Some(id) => match dialog.to_patch() {
                Ok(patch) => self
                    .store
                    .update(&id, patch)
                    .map(|found| found.then_some("Event updated")),
                Err(err) => Err(StoreError::Invalid(err)),
            },
            None => match dialog.to_draft() {
                Ok(draft) => self.store.add(draft).map(|_| Some("Event added")),
                Err(err) => Err(StoreError::Invalid(err)),
            },
        };

        match result {
            Ok(message) => {
                self.dialog = None;
                if let Some(message) = message {
                    self.toasts.success(message, self.clock.now());
                }
            }
            Err(StoreError::Invalid(err)) => {
                if let Some(dialog) = self.dialog.as_mut() {
                    dialog.error_message = Some(err.to_string());
                }
            }
            Err(StoreError::Storage(err)) => {
                // The change is kept in memory, so the form is done either way
                self.dialog = None;
                self.report_save_failure(&err);
            }
        }
    }

    fn report_save_failure(&mut self, err: &StorageError) {
        log::error!("Failed to save events: {}", err);
        self.toasts.error("Failed to save events", self.clock.now());
    }
}
