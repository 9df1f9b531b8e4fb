// Property-based tests for event persistence
// Persisting then hydrating must give back exactly the events that were stored

use chrono::{Days, NaiveDate};
use month_planner::models::category::EventCategory;
use month_planner::models::event::EventDraft;
use month_planner::services::event::EventStore;
use month_planner::services::storage::MemoryStore;
use proptest::prelude::*;

const KEY: &str = "calendarEvents";

fn category_strategy() -> impl Strategy<Value = EventCategory> {
    prop::sample::select(EventCategory::ALL.to_vec())
}

fn color_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["#3b82f6", "#10b981", "#ef4444", "#fff", "#A0B1C2"])
        .prop_map(str::to_string)
}

fn draft_strategy() -> impl Strategy<Value = EventDraft> {
    (
        "[A-Za-z0-9][A-Za-z0-9 '\"/&é]{0,24}",
        0..20_000u64,
        prop::option::of((0..24u32, 0..60u32)),
        prop::option::of(".{0,40}"),
        category_strategy(),
        color_strategy(),
    )
        .prop_map(|(title, offset, time, description, category, color)| {
            let base = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
            let date = base.checked_add_days(Days::new(offset)).unwrap();
            let mut draft = EventDraft::new(title, date)
                .category(category)
                .color(color);
            if let Some((hour, minute)) = time {
                draft = draft.time(format!("{hour:02}:{minute:02}"));
            }
            if let Some(description) = description {
                draft = draft.description(description);
            }
            draft
        })
}

proptest! {
    /// Property: persist then hydrate N events yields N identical events
    #[test]
    fn prop_persist_then_hydrate_is_lossless(
        drafts in prop::collection::vec(draft_strategy(), 0..25),
    ) {
        let mut store = EventStore::new(MemoryStore::new(), KEY);
        for draft in drafts {
            store.add(draft).unwrap();
        }
        let mut original = store.events().to_vec();
        let storage = store.close().unwrap();

        let mut reopened = EventStore::new(storage, KEY);
        prop_assert_eq!(reopened.hydrate().unwrap(), original.len());
        let mut restored = reopened.events().to_vec();

        original.sort_by(|a, b| a.id.cmp(&b.id));
        restored.sort_by(|a, b| a.id.cmp(&b.id));
        prop_assert_eq!(restored, original);
    }

    /// Property: a second load of the same slot changes nothing
    #[test]
    fn prop_hydrate_is_idempotent(
        drafts in prop::collection::vec(draft_strategy(), 1..10),
    ) {
        let mut store = EventStore::new(MemoryStore::new(), KEY);
        for draft in drafts {
            store.add(draft).unwrap();
        }
        let storage = store.close().unwrap();

        let mut first = EventStore::new(storage, KEY);
        first.hydrate().unwrap();
        let loaded = first.events().to_vec();

        let mut second = EventStore::new(first.into_storage(), KEY);
        second.hydrate().unwrap();
        prop_assert_eq!(second.events(), loaded.as_slice());
    }
}
