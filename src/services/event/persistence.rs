//! Wire format for the persisted event list.
//!
//! The blob is a JSON array of flat objects with string fields. Absent
//! optional values are written as empty strings and read back as absent,
//! so blobs written by older clients load unchanged.

use serde::{Deserialize, Serialize};
use serde_json::Error as SerdeError;

use crate::models::category::EventCategory;
use crate::models::event::{Event, EventId, DEFAULT_EVENT_COLOR};
use crate::utils::date::{format_date, parse_date};

/// Identifiers may have been written as strings or as numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
enum StoredId {
    Text(String),
    Number(i64),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(super) struct StoredEvent {
    #[serde(default)]
    id: Option<StoredId>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    time: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    color: Option<String>,
}

impl From<&Event> for StoredEvent {
    fn from(event: &Event) -> Self {
        Self {
            id: Some(StoredId::Text(event.id.to_string())),
            title: Some(event.title.clone()),
            date: Some(format_date(event.date)),
            time: Some(event.time.clone().unwrap_or_default()),
            description: Some(event.description.clone().unwrap_or_default()),
            category: Some(event.category.as_str().to_string()),
            color: Some(event.color.clone()),
        }
    }
}

impl StoredEvent {
    /// Stored identifier, if the record carried a non-empty one.
    pub(super) fn id(&self) -> Option<EventId> {
        match &self.id {
            Some(StoredId::Text(id)) if !id.is_empty() => Some(EventId::new(id.clone())),
            Some(StoredId::Number(id)) => Some(EventId::new(id.to_string())),
            _ => None,
        }
    }

    /// Convert to an event with identifier `id`.
    ///
    /// Records without a title or with an unreadable date are rejected; other
    /// missing or unknown values fall back to defaults.
    pub(super) fn into_event(self, id: EventId) -> Option<Event> {
        let title = self.title.filter(|t| !t.trim().is_empty())?;
        let date = self.date.as_deref().and_then(parse_date)?;

        let category = match self.category.as_deref().filter(|c| !c.is_empty()) {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                log::warn!("Unknown category '{}' on event {}, using personal", raw, id);
                EventCategory::Personal
            }),
            None => EventCategory::Personal,
        };

        Some(Event {
            id,
            title,
            date,
            time: self.time.filter(|t| !t.is_empty()),
            description: self.description.filter(|d| !d.is_empty()),
            category,
            color: self
                .color
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| DEFAULT_EVENT_COLOR.to_string()),
        })
    }
}

pub(super) fn encode(events: &[Event]) -> Result<String, SerdeError> {
    let stored: Vec<StoredEvent> = events.iter().map(StoredEvent::from).collect();
    serde_json::to_string(&stored)
}

pub(super) fn decode(data: &str) -> Result<Vec<StoredEvent>, SerdeError> {
    serde_json::from_str(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_encode_writes_empty_strings_for_absent_fields() {
        let event = Event {
            id: EventId::new("1700000000000"),
            title: "Dentist".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            time: None,
            description: None,
            category: EventCategory::Important,
            color: "#ef4444".to_string(),
        };

        let json: serde_json::Value = serde_json::from_str(&encode(&[event]).unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "id": "1700000000000",
                "title": "Dentist",
                "date": "2024-03-05",
                "time": "",
                "description": "",
                "category": "important",
                "color": "#ef4444"
            }])
        );
    }

    #[test]
    fn test_decode_accepts_numeric_ids_and_missing_fields() {
        let records = decode(r#"[{"id": 42, "title": "Gym", "date": "2024-01-02"}]"#).unwrap();
        assert_eq!(records.len(), 1);

        let id = records[0].id().unwrap();
        assert_eq!(id.as_str(), "42");

        let event = records[0].clone().into_event(id).unwrap();
        assert_eq!(event.category, EventCategory::Personal);
        assert_eq!(event.color, DEFAULT_EVENT_COLOR);
        assert!(event.time.is_none());
    }

    #[test]
    fn test_decode_rejects_non_array() {
        assert!(decode("{\"not\": \"a list\"}").is_err());
        assert!(decode("not json").is_err());
    }

    #[test]
    fn test_records_without_title_or_date_are_dropped() {
        let records = decode(r#"[{"id": "1", "title": "", "date": "2024-01-02"},
                                 {"id": "2", "title": "x", "date": ""},
                                 {"id": "3", "title": "x", "date": "02/01/2024"}]"#)
        .unwrap();
        for record in records {
            let id = record.id().unwrap();
            assert!(record.into_event(id).is_none());
        }
    }

    #[test]
    fn test_unknown_category_falls_back_to_personal() {
        let records =
            decode(r#"[{"id": "1", "title": "x", "date": "2024-01-02", "category": "birthday"}]"#)
                .unwrap();
        let event = records[0].clone().into_event(EventId::new("1")).unwrap();
        assert_eq!(event.category, EventCategory::Personal);
    }
}
