use super::EventStore;
use crate::models::event::{Event, EventId};
use crate::services::storage::KeyValueStore;
use crate::utils::date::parse_date;
use chrono::NaiveDate;

impl<S: KeyValueStore> EventStore<S> {
    /// Every event, in store order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, id: &EventId) -> Option<&Event> {
        self.events.iter().find(|e| &e.id == id)
    }

    pub fn contains(&self, id: &EventId) -> bool {
        self.get(id).is_some()
    }

    /// Events on exactly `date`, in store order.
    pub fn find_by_date(&self, date: NaiveDate) -> Vec<&Event> {
        self.events.iter().filter(|e| e.date == date).collect()
    }

    /// Same as [`find_by_date`](Self::find_by_date) for a `YYYY-MM-DD` string.
    /// An unparseable string matches nothing.
    pub fn find_by_date_str(&self, date: &str) -> Vec<&Event> {
        match parse_date(date) {
            Some(date) => self.find_by_date(date),
            None => Vec::new(),
        }
    }
}
