//! Per-month snapshots of remote data.
//!
//! Every structure here is rebuilt from a complete server response and
//! swapped in whole; nothing is patched in place.

use std::collections::BTreeMap;

use shared::{Event, HolidayMap};

/// Events of the visible month grouped by date key
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventCache {
    by_date: BTreeMap<String, Vec<Event>>,
}

impl EventCache {
    /// Group a month's events by the date portion of their start timestamp
    pub fn from_events(events: impl IntoIterator<Item = Event>) -> Self {
        let mut by_date: BTreeMap<String, Vec<Event>> = BTreeMap::new();
        for event in events {
            by_date
                .entry(event.date_key().to_string())
                .or_default()
                .push(event);
        }
        Self { by_date }
    }

    /// Events on a date, in server order
    pub fn on(&self, date_key: &str) -> &[Event] {
        self.by_date.get(date_key).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Number of notes per date key for the visible grid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteIndicators {
    counts: BTreeMap<String, usize>,
}

impl NoteIndicators {
    /// Dates with a zero count are dropped
    pub fn from_counts(counts: impl IntoIterator<Item = (String, usize)>) -> Self {
        Self {
            counts: counts.into_iter().filter(|(_, n)| *n > 0).collect(),
        }
    }

    pub fn count(&self, date_key: &str) -> usize {
        self.counts.get(date_key).copied().unwrap_or(0)
    }
}

/// Everything the month grid is decorated with
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthData {
    pub events: EventCache,
    pub holidays: HolidayMap,
    pub note_counts: NoteIndicators,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(id: i64, start_date: &str) -> Event {
        Event {
            id,
            title: format!("Event {}", id),
            description: String::new(),
            start_date: start_date.to_string(),
            end_date: None,
            category: "General".to_string(),
            recurrence: None,
        }
    }

    #[test]
    fn test_group_events_by_date() {
        let cache = EventCache::from_events(vec![
            event(1, "2024-03-05T00:00:00"),
            event(2, "2024-03-05T00:00:00"),
            event(3, "2024-03-15T12:00:00"),
        ]);

        assert_eq!(cache.on("2024-03-05").len(), 2);
        assert_eq!(cache.on("2024-03-15").len(), 1);
        assert!(cache.on("2024-03-30").is_empty());
    }

    #[test]
    fn test_group_preserves_server_order() {
        let cache = EventCache::from_events(vec![
            event(9, "2024-03-05T18:00:00"),
            event(4, "2024-03-05T08:00:00"),
        ]);
        let ids: Vec<i64> = cache.on("2024-03-05").iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![9, 4]);
    }

    #[test]
    fn test_rebuild_replaces_previous_contents() {
        let march = EventCache::from_events(vec![event(1, "2024-03-05T00:00:00")]);
        assert_eq!(march.on("2024-03-05").len(), 1);

        let april = EventCache::from_events(vec![event(2, "2024-04-01T00:00:00")]);
        assert!(april.on("2024-03-05").is_empty());
        assert_eq!(april.on("2024-04-01")[0].id, 2);
    }

    #[test]
    fn test_empty_cache() {
        let cache = EventCache::from_events(Vec::new());
        assert_eq!(cache, EventCache::default());
        assert!(cache.on("2024-03-05").is_empty());
    }

    #[test]
    fn test_note_indicators() {
        let indicators = NoteIndicators::from_counts(vec![
            ("2024-03-05".to_string(), 2),
            ("2024-03-06".to_string(), 0),
        ]);
        assert_eq!(indicators.count("2024-03-05"), 2);
        assert_eq!(indicators.count("2024-03-06"), 0);
        assert_eq!(indicators.count("2024-03-07"), 0);
        assert_eq!(
            indicators,
            NoteIndicators::from_counts(vec![("2024-03-05".to_string(), 2)])
        );
    }
}
