//! Calendar event store entry point.
//! Owns the in-memory event list and flushes it to a key-value slot after
//! every mutation, with operations split across focused submodules.

use thiserror::Error;

use crate::models::event::{Event, EventValidationError};
use crate::services::storage::{KeyValueStore, StorageError};

pub mod crud;
mod persistence;
pub mod queries;

/// Errors from event store mutations.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Invalid(#[from] EventValidationError),

    #[error("Failed to persist events: {0}")]
    Storage(#[from] StorageError),
}

/// Owning collection of all events plus their persistence.
///
/// Lifecycle: [`new`](Self::new) then [`hydrate`](Self::hydrate) on startup,
/// [`close`](Self::close) on teardown.
pub struct EventStore<S: KeyValueStore> {
    storage: S,
    key: String,
    pub(crate) events: Vec<Event>,
}

impl<S: KeyValueStore> EventStore<S> {
    /// Create an empty store over `storage`, using slot `key`.
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            events: Vec::new(),
        }
    }

    /// Create a store and hydrate it in one step.
    ///
    /// The store is always returned; a failed hydrate leaves it empty and the
    /// error comes back next to it.
    pub fn open(storage: S, key: impl Into<String>) -> (Self, Result<usize, StorageError>) {
        let mut store = Self::new(storage, key);
        let loaded = store.hydrate();
        (store, loaded)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Replace the in-memory list with what storage holds.
    ///
    /// An absent slot gives an empty store. Malformed data also leaves the
    /// store empty and is reported as an error; it is never fatal.
    /// Records whose id was missing or duplicated get a fresh one, and the
    /// repaired list is written back so those ids stay stable across loads.
    pub fn hydrate(&mut self) -> Result<usize, StorageError> {
        self.events.clear();

        let Some(data) = self.storage.get(&self.key)? else {
            log::info!("No saved events under '{}'", self.key);
            return Ok(0);
        };

        let records = persistence::decode(&data).map_err(|err| {
            log::error!("Failed to load events from '{}': {}", self.key, err);
            StorageError::from(err)
        })?;

        let total = records.len();
        let mut repaired = 0;
        for record in records {
            let id = match record.id() {
                Some(id) if !self.contains(&id) => id,
                _ => {
                    repaired += 1;
                    self.generate_id()
                }
            };
            match record.into_event(id.clone()) {
                Some(event) => self.events.push(event),
                None => log::warn!("Skipping stored event {} without a title or date", id),
            }
        }

        log::info!(
            "Loaded {} of {} stored events from '{}'",
            self.events.len(),
            total,
            self.key
        );

        if repaired > 0 {
            log::info!("Assigned {} new event ids, saving them", repaired);
            if let Err(err) = self.persist() {
                log::warn!("Repaired ids were not saved: {}", err);
            }
        }
        Ok(self.events.len())
    }

    /// Serialize the full list and write it to the storage slot.
    pub fn persist(&mut self) -> Result<(), StorageError> {
        let data = persistence::encode(&self.events)?;
        self.storage.set(&self.key, &data).map_err(|err| {
            log::error!("Failed to save events to '{}': {}", self.key, err);
            err
        })?;
        log::debug!("Persisted {} events to '{}'", self.events.len(), self.key);
        Ok(())
    }

    /// Flush and hand back the storage backend.
    pub fn close(mut self) -> Result<S, StorageError> {
        self.persist()?;
        Ok(self.storage)
    }

    /// Hand back the storage backend without flushing.
    pub fn into_storage(self) -> S {
        self.storage
    }
}
