//! Async flows shared by every view: month loads, note indicator batches,
//! mutations and calculator evaluation.
//!
//! Nothing here touches the DOM. Each function talks to a [`CalendarApi`] and
//! returns plain values; the caller decides whether a result is still
//! current (see [`crate::sequence`]) before applying it.

use futures::future::join_all;
use shared::{
    date_portion, ApiError, CalculatorRequest, EventRequest, HolidayMap, MutationResponse,
    NoteContentRequest, NoteDateRequest, NoteRequest,
};

use crate::api::CalendarApi;
use crate::banner::Banner;
use crate::cache::{EventCache, NoteIndicators};
use crate::calendar::CalendarFocus;
use crate::detail::DetailNotes;

/// A user-initiated change to server data
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    CreateEvent(EventRequest),
    UpdateEvent { id: i64, request: EventRequest },
    DeleteEvent { id: i64, date: String },
    /// Upsert the note for `request.date`
    SaveNote(NoteRequest),
    CreateNote(NoteRequest),
    UpdateNote { id: i64, date: String, content: String },
    DeleteNote { id: i64, date: String },
    DeleteNotesForDate { date: String },
}

impl Mutation {
    /// The date whose detail view the mutation affects
    pub fn date(&self) -> &str {
        match self {
            Mutation::CreateEvent(request) | Mutation::UpdateEvent { request, .. } => {
                date_portion(&request.start_date)
            }
            Mutation::SaveNote(request) | Mutation::CreateNote(request) => &request.date,
            Mutation::DeleteEvent { date, .. }
            | Mutation::UpdateNote { date, .. }
            | Mutation::DeleteNote { date, .. }
            | Mutation::DeleteNotesForDate { date } => date,
        }
    }

    pub fn touches_events(&self) -> bool {
        matches!(
            self,
            Mutation::CreateEvent(_) | Mutation::UpdateEvent { .. } | Mutation::DeleteEvent { .. }
        )
    }

    /// Banner text on success
    pub fn success_message(&self) -> &'static str {
        match self {
            Mutation::CreateEvent(_) => "Event saved successfully!",
            Mutation::UpdateEvent { .. } => "Event updated successfully!",
            Mutation::DeleteEvent { .. } => "Event deleted successfully!",
            Mutation::SaveNote(_) => "Note saved successfully!",
            Mutation::CreateNote(_) => "New note created successfully!",
            Mutation::UpdateNote { .. } => "Note updated successfully!",
            Mutation::DeleteNote { .. } | Mutation::DeleteNotesForDate { .. } => {
                "Note deleted successfully!"
            }
        }
    }

    /// Banner text on failure, before any server reason is appended
    pub fn failure_message(&self) -> &'static str {
        match self {
            Mutation::CreateEvent(_) => "Error saving event",
            Mutation::UpdateEvent { .. } => "Error updating event",
            Mutation::DeleteEvent { .. } => "Error deleting event",
            Mutation::SaveNote(_) => "Error saving note",
            Mutation::CreateNote(_) => "Error creating new note",
            Mutation::UpdateNote { .. } => "Error updating note",
            Mutation::DeleteNote { .. } | Mutation::DeleteNotesForDate { .. } => {
                "Error deleting note"
            }
        }
    }

    fn editor_update(&self) -> EditorUpdate {
        match self {
            Mutation::SaveNote(_) | Mutation::CreateNote(_) => EditorUpdate::Reload,
            Mutation::DeleteNotesForDate { .. } => EditorUpdate::Clear,
            _ => EditorUpdate::Keep,
        }
    }
}

/// What happens to the sidebar note editor after a successful mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorUpdate {
    Keep,
    /// Re-read the most recent note of the date into the editor
    Reload,
    Clear,
}

/// Views to reload after a successful mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Refresh {
    pub date: String,
    /// Reload the month's events (and re-render the grid)
    pub events: bool,
    pub note_indicators: bool,
    pub editor: EditorUpdate,
}

/// One change a [`Refresh`] makes to the screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshStep {
    /// Re-show the detail panel, keeping drafts of the same date
    ShowDetail(String),
    /// Reload the focused month's events; the month is read when the load starts
    ReloadEvents,
    ReloadNoteIndicators,
    LoadEditor(String),
    ClearEditor,
}

impl Refresh {
    /// Steps in the order the view applies them
    pub fn steps(&self) -> Vec<RefreshStep> {
        let mut steps = vec![RefreshStep::ShowDetail(self.date.clone())];
        if self.events {
            steps.push(RefreshStep::ReloadEvents);
        }
        if self.note_indicators {
            steps.push(RefreshStep::ReloadNoteIndicators);
        }
        match self.editor {
            EditorUpdate::Reload => steps.push(RefreshStep::LoadEditor(self.date.clone())),
            EditorUpdate::Clear => steps.push(RefreshStep::ClearEditor),
            EditorUpdate::Keep => {}
        }
        steps
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationOutcome {
    pub banner: Banner,
    /// `None` when the mutation failed; nothing is refreshed then
    pub refresh: Option<Refresh>,
}

impl MutationOutcome {
    pub fn succeeded(&self) -> bool {
        self.refresh.is_some()
    }
}

/// Turn a mutation reply into a banner and the follow-up refreshes.
///
/// Only the `success` flag decides the outcome; the echoed payload is ignored.
pub fn interpret(mutation: &Mutation, result: Result<MutationResponse, ApiError>) -> MutationOutcome {
    match result {
        Ok(response) if response.success => {
            log::info!(target: "workflow", "{}", mutation.success_message());
            let events = mutation.touches_events();
            MutationOutcome {
                banner: Banner::success(mutation.success_message()),
                refresh: Some(Refresh {
                    date: mutation.date().to_string(),
                    events,
                    note_indicators: !events,
                    editor: mutation.editor_update(),
                }),
            }
        }
        Ok(response) => {
            log::warn!(
                target: "workflow",
                "{} (server said: {:?})",
                mutation.failure_message(),
                response.error
            );
            MutationOutcome {
                banner: Banner::failure(mutation.failure_message(), response.error.as_deref()),
                refresh: None,
            }
        }
        Err(e) => {
            log::error!(target: "workflow", "{}: {}", mutation.failure_message(), e);
            MutationOutcome {
                banner: Banner::error(mutation.failure_message()),
                refresh: None,
            }
        }
    }
}

/// Send a mutation and interpret the reply
pub async fn perform<A>(api: &A, mutation: Mutation) -> MutationOutcome
where
    A: CalendarApi + ?Sized,
{
    log::debug!(target: "workflow", "Sending {:?}", mutation);
    let result = match &mutation {
        Mutation::CreateEvent(request) => api.create_event(request).await,
        Mutation::UpdateEvent { id, request } => api.update_event(*id, request).await,
        Mutation::DeleteEvent { id, .. } => api.delete_event(*id).await,
        Mutation::SaveNote(request) => api.save_note(request).await,
        Mutation::CreateNote(request) => api.create_note(request).await,
        Mutation::UpdateNote { id, content, .. } => {
            let request = NoteContentRequest {
                content: content.clone(),
            };
            api.update_note(*id, &request).await
        }
        Mutation::DeleteNote { id, .. } => api.delete_note(*id).await,
        Mutation::DeleteNotesForDate { date } => {
            let request = NoteDateRequest { date: date.clone() };
            api.delete_notes_for_date(&request).await
        }
    };
    interpret(&mutation, result)
}

/// Fetch and group the events of the focused month
pub async fn load_events<A>(api: &A, focus: CalendarFocus) -> Result<EventCache, ApiError>
where
    A: CalendarApi + ?Sized,
{
    let events = api.get_events(focus.year(), focus.month()).await?;
    log::info!(
        target: "workflow",
        "Loaded {} events for {}",
        events.len(),
        focus.title()
    );
    Ok(EventCache::from_events(events))
}

pub async fn load_holidays<A>(
    api: &A,
    focus: CalendarFocus,
    countries: &[String],
) -> Result<HolidayMap, ApiError>
where
    A: CalendarApi + ?Sized,
{
    let holidays = api.get_holidays(focus.year(), focus.month(), countries).await?;
    log::debug!(
        target: "workflow",
        "Loaded holidays on {} dates for {}",
        holidays.len(),
        focus.title()
    );
    Ok(holidays)
}

/// Count the notes of every given date.
///
/// The server has no range query, so one lookup per date is issued and all
/// of them are awaited together. A failed lookup counts as no notes.
pub async fn load_note_indicators<A>(api: &A, date_keys: &[String]) -> NoteIndicators
where
    A: CalendarApi + ?Sized,
{
    let lookups = date_keys.iter().map(|key| async move {
        match api.get_notes(key).await {
            Ok(notes) => (key.clone(), notes.len()),
            Err(e) => {
                log::debug!(target: "workflow", "Note lookup for {} failed: {}", key, e);
                (key.clone(), 0)
            }
        }
    });
    NoteIndicators::from_counts(join_all(lookups).await)
}

/// Notes for the detail panel of one date
pub async fn load_detail_notes<A>(api: &A, date_key: &str) -> DetailNotes
where
    A: CalendarApi + ?Sized,
{
    match api.get_notes(date_key).await {
        Ok(notes) => DetailNotes::Loaded(notes),
        Err(e) => {
            log::error!(target: "workflow", "Failed to load notes for {}: {}", date_key, e);
            DetailNotes::Failed
        }
    }
}

/// Ask the server to evaluate an expression. `None` means the display
/// should show an error.
pub async fn evaluate<A>(api: &A, expression: &str) -> Option<f64>
where
    A: CalendarApi + ?Sized,
{
    let request = CalculatorRequest {
        expression: expression.to_string(),
    };
    match api.calculate(&request).await {
        Ok(response) => {
            if let Some(error) = &response.error {
                log::warn!(target: "workflow", "Calculator rejected {}: {}", expression, error);
            }
            response.numeric_result()
        }
        Err(e) => {
            log::error!(target: "workflow", "Calculator request failed: {}", e);
            None
        }
    }
}
