use super::{EventStore, StoreError};
use crate::models::event::{Event, EventDraft, EventId, EventPatch};
use crate::services::storage::{KeyValueStore, StorageError};
use chrono::Utc;

impl<S: KeyValueStore> EventStore<S> {
    /// Append a new event and persist.
    ///
    /// A `StoreError::Storage` means the event is in memory but was not
    /// flushed.
    pub fn add(&mut self, draft: EventDraft) -> Result<EventId, StoreError> {
        let mut draft = draft.normalized()?;

        let id = match draft.id.take() {
            Some(id) if !self.contains(&id) => id,
            Some(id) => {
                log::warn!("Event id {} already in use, generating a new one", id);
                self.generate_id()
            }
            None => self.generate_id(),
        };

        let event = Event::from_draft(draft, id.clone());
        log::info!("Adding event {} '{}' on {}", event.id, event.title, event.date);
        self.events.push(event);

        self.persist()?;
        Ok(id)
    }

    /// Apply a partial update to the event with `id` and persist.
    ///
    /// Returns `Ok(false)` without touching storage when no event has that id,
    /// whatever the patch holds.
    pub fn update(&mut self, id: &EventId, patch: EventPatch) -> Result<bool, StoreError> {
        let Some(event) = self.events.iter_mut().find(|e| &e.id == id) else {
            log::debug!("Update ignored, no event with id {}", id);
            return Ok(false);
        };

        event.apply(patch.normalized()?);
        log::info!("Updated event {}", id);

        self.persist()?;
        Ok(true)
    }

    /// Remove the event with `id` and persist.
    ///
    /// Returns `Ok(false)` without touching storage when no event has that id.
    pub fn remove(&mut self, id: &EventId) -> Result<bool, StorageError> {
        let before = self.events.len();
        self.events.retain(|e| &e.id != id);

        if self.events.len() == before {
            log::debug!("Delete ignored, no event with id {}", id);
            return Ok(false);
        }

        log::info!("Deleted event {}", id);
        self.persist()?;
        Ok(true)
    }

    /// Millisecond timestamp id, bumped until it is unused.
    pub(super) fn generate_id(&self) -> EventId {
        let mut candidate = Utc::now().timestamp_millis();
        loop {
            let id = EventId::new(candidate.to_string());
            if !self.contains(&id) {
                return id;
            }
            candidate += 1;
        }
    }
}
