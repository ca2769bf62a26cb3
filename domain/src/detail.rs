use chrono::NaiveDate;
use shared::{Event, Note};

use crate::date_utils::{format_date_for_display, is_today};

/// Shown when a date has neither events nor notes
pub const EMPTY_PLACEHOLDER: &str = "No events or notes for this date.";

/// Shown when the notes for the selected date could not be fetched
pub const LOAD_ERROR_TEXT: &str = "Error loading content";

/// Notes fetched for the selected date
#[derive(Debug, Clone, PartialEq)]
pub enum DetailNotes {
    /// Request in flight
    Pending,
    Loaded(Vec<Note>),
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailContent {
    Loading,
    Items { events: Vec<Event>, notes: Vec<Note> },
    Empty,
    LoadFailed,
}

/// The combined events + notes panel for one date
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub date_key: String,
    pub heading: String,
    pub is_today: bool,
    pub content: DetailContent,
}

impl DetailView {
    /// Combine the cached events for a date with its freshly fetched notes
    pub fn build(date_key: &str, today: NaiveDate, events: &[Event], notes: &DetailNotes) -> Self {
        let content = match notes {
            DetailNotes::Pending => DetailContent::Loading,
            DetailNotes::Failed => DetailContent::LoadFailed,
            DetailNotes::Loaded(notes) if events.is_empty() && notes.is_empty() => {
                DetailContent::Empty
            }
            DetailNotes::Loaded(notes) => DetailContent::Items {
                events: events.to_vec(),
                notes: notes.clone(),
            },
        };

        Self {
            date_key: date_key.to_string(),
            heading: format_date_for_display(date_key),
            is_today: is_today(date_key, today),
            content,
        }
    }

    /// Text shown in place of the sections, if any
    pub fn placeholder(&self) -> Option<&'static str> {
        match self.content {
            DetailContent::Empty => Some(EMPTY_PLACEHOLDER),
            DetailContent::LoadFailed => Some(LOAD_ERROR_TEXT),
            DetailContent::Loading | DetailContent::Items { .. } => None,
        }
    }

    pub fn has_content(&self) -> bool {
        matches!(self.content, DetailContent::Items { .. })
    }
}

/// Text preloaded into the note editor when a date is selected: the first
/// (most recent) note, or nothing
pub fn editor_text(notes: &[Note]) -> String {
    notes.first().map(|n| n.content.clone()).unwrap_or_default()
}
