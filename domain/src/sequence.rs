//! Monotonic request tickets.
//!
//! Fetches for the same view can resolve in any order. Each fetch takes a
//! ticket before it starts; when the response arrives it is applied only if
//! no newer ticket has been issued since.
//!
//! [`ViewRequests`] also records which month is on screen. A month load
//! reads it when the load begins, never from the caller, so reloads
//! triggered by callbacks created before a navigation still fetch the
//! month the user is looking at.

use crate::calendar::CalendarFocus;

/// Ticket handed out when a request starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

/// Issues tickets for one logical resource
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    /// Start a new request, superseding every ticket issued before it
    pub fn issue(&mut self) -> RequestTicket {
        self.latest += 1;
        RequestTicket(self.latest)
    }

    /// Whether a response carrying this ticket may still be applied
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest
    }
}

/// The resources a month view loads independently
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthResource {
    Events,
    Holidays,
    NoteIndicators,
}

/// A month load that has been started
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRequest {
    pub ticket: RequestTicket,
    /// Month to fetch
    pub focus: CalendarFocus,
}

/// The focused month and request sequences for everything the month view
/// fetches, plus the detail panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRequests {
    focus: CalendarFocus,
    events: RequestSequence,
    holidays: RequestSequence,
    note_indicators: RequestSequence,
    detail: RequestSequence,
}

impl ViewRequests {
    pub fn new(focus: CalendarFocus) -> Self {
        Self {
            focus,
            events: RequestSequence::default(),
            holidays: RequestSequence::default(),
            note_indicators: RequestSequence::default(),
            detail: RequestSequence::default(),
        }
    }

    pub fn focus(&self) -> CalendarFocus {
        self.focus
    }

    /// Move the view to another month. Loads still in flight for the
    /// previous month stop being current.
    pub fn focus_on(&mut self, focus: CalendarFocus) {
        if focus != self.focus {
            self.focus = focus;
            self.events.issue();
            self.holidays.issue();
            self.note_indicators.issue();
        }
    }

    /// Start loading a resource for the focused month
    pub fn begin(&mut self, resource: MonthResource) -> MonthRequest {
        MonthRequest {
            ticket: self.sequence_mut(resource).issue(),
            focus: self.focus,
        }
    }

    pub fn is_current(&self, resource: MonthResource, ticket: RequestTicket) -> bool {
        match resource {
            MonthResource::Events => self.events.is_current(ticket),
            MonthResource::Holidays => self.holidays.is_current(ticket),
            MonthResource::NoteIndicators => self.note_indicators.is_current(ticket),
        }
    }

    pub fn begin_detail(&mut self) -> RequestTicket {
        self.detail.issue()
    }

    pub fn is_current_detail(&self, ticket: RequestTicket) -> bool {
        self.detail.is_current(ticket)
    }

    fn sequence_mut(&mut self, resource: MonthResource) -> &mut RequestSequence {
        match resource {
            MonthResource::Events => &mut self.events,
            MonthResource::Holidays => &mut self.holidays,
            MonthResource::NoteIndicators => &mut self.note_indicators,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::EventCache;
    use shared::Event;

    fn month(year: i32, month: u32) -> CalendarFocus {
        CalendarFocus::new(year, month).unwrap()
    }

    fn requests() -> ViewRequests {
        ViewRequests::new(month(2024, 3))
    }

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
    fn test_only_latest_ticket_is_current() {
        let mut sequence = RequestSequence::default();
        let first = sequence.issue();
        assert!(sequence.is_current(first));

        let second = sequence.issue();
        assert!(!sequence.is_current(first));
        assert!(sequence.is_current(second));
    }

    #[test]
    fn test_reordered_month_responses_keep_latest() {
        let mut requests = requests();
        let mut cache = EventCache::default();

        // User navigates March -> April quickly; April's fetch is issued last
        let march_ticket = requests.begin(MonthResource::Events).ticket;
        requests.focus_on(month(2024, 4));
        let april_ticket = requests.begin(MonthResource::Events).ticket;

        // April arrives first and is applied
        let april = vec![event(2, "2024-04-10T00:00:00")];
        if requests.is_current(MonthResource::Events, april_ticket) {
            cache = EventCache::from_events(april);
        }

        // The slow March response must not overwrite it
        let march = vec![event(1, "2024-03-05T00:00:00")];
        if requests.is_current(MonthResource::Events, march_ticket) {
            cache = EventCache::from_events(march);
        }

        assert_eq!(cache.on("2024-04-10").len(), 1);
        assert!(cache.on("2024-03-05").is_empty());
    }

    #[test]
    fn test_resources_are_sequenced_independently() {
        let mut requests = requests();
        let holidays = requests.begin(MonthResource::Holidays).ticket;
        let _events = requests.begin(MonthResource::Events);
        let _notes = requests.begin(MonthResource::NoteIndicators);

        // Reloading events after a mutation does not invalidate the holiday fetch
        let _reload = requests.begin(MonthResource::Events);
        assert!(requests.is_current(MonthResource::Holidays, holidays));
    }

    #[test]
    fn test_detail_sequence() {
        let mut requests = requests();
        let monday = requests.begin_detail();
        let tuesday = requests.begin_detail();
        assert!(!requests.is_current_detail(monday));
        assert!(requests.is_current_detail(tuesday));

        // Month loads never touch the detail sequence
        requests.begin(MonthResource::Events);
        requests.focus_on(month(2024, 4));
        assert!(requests.is_current_detail(tuesday));
    }

    #[test]
    fn test_reload_after_navigation_fetches_focused_month() {
        let mut requests = requests();
        requests.focus_on(month(2024, 4));

        // A save issued from a form rendered while March was shown
        let reload = requests.begin(MonthResource::Events);
        assert_eq!(reload.focus, month(2024, 4));
        assert!(requests.is_current(MonthResource::Events, reload.ticket));
    }

    #[test]
    fn test_navigation_invalidates_loads_in_flight() {
        let mut requests = requests();
        let events = requests.begin(MonthResource::Events);
        let notes = requests.begin(MonthResource::NoteIndicators);

        requests.focus_on(month(2024, 4));
        assert!(!requests.is_current(MonthResource::Events, events.ticket));
        assert!(!requests.is_current(MonthResource::NoteIndicators, notes.ticket));
    }

    #[test]
    fn test_refocusing_same_month_keeps_loads() {
        let mut requests = requests();
        let events = requests.begin(MonthResource::Events);

        requests.focus_on(month(2024, 3));
        assert!(requests.is_current(MonthResource::Events, events.ticket));
        assert_eq!(requests.focus(), month(2024, 3));
    }
}
