use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Category the calendar page assigns to every event it creates
pub const DEFAULT_EVENT_CATEGORY: &str = "General";

/// A calendar event as returned by `GET /api/events`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Local timestamp without offset, e.g. "2024-03-05T00:00:00"
    pub start_date: String,
    /// Present on list responses; equals `start_date` for single-point events
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default = "default_category")]
    pub category: String,
    /// 'daily', 'weekly', 'monthly', 'yearly' or absent
    #[serde(default)]
    pub recurrence: Option<String>,
}

fn default_category() -> String {
    DEFAULT_EVENT_CATEGORY.to_string()
}

impl Event {
    /// The "YYYY-MM-DD" portion of the start timestamp
    pub fn date_key(&self) -> &str {
        date_portion(&self.start_date)
    }

    /// Request body that re-submits this event with a new title and description
    pub fn edited(&self, title: &str, description: &str) -> EventRequest {
        EventRequest {
            title: title.to_string(),
            description: description.to_string(),
            start_date: self.start_date.clone(),
            category: DEFAULT_EVENT_CATEGORY.to_string(),
        }
    }
}

/// Strip the time part of an ISO-like timestamp ("2024-03-05T10:00:00" -> "2024-03-05")
pub fn date_portion(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}

/// Body for `POST /api/events` and `PUT /api/events/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRequest {
    pub title: String,
    pub description: String,
    pub start_date: String,
    pub category: String,
}

impl EventRequest {
    /// Build a request for an all-day entry on the given date key
    pub fn for_date(title: &str, description: &str, date_key: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            start_date: format!("{}T00:00:00", date_key),
            category: DEFAULT_EVENT_CATEGORY.to_string(),
        }
    }
}

/// Reply shape shared by every mutating endpoint.
///
/// Failures come back as `{"error": "..."}` (usually with a 4xx/5xx status),
/// so a missing `success` field reads as `false`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MutationResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    /// Echo of the stored event for event create/update
    #[serde(default)]
    pub event: Option<Event>,
}

impl MutationResponse {
    pub fn succeeded() -> Self {
        Self {
            success: true,
            ..Self::default()
        }
    }

    pub fn failed(error: &str) -> Self {
        Self {
            success: false,
            error: Some(error.to_string()),
            event: None,
        }
    }
}

/// Holiday descriptions per date key, e.g. `{"2024-10-03": ["Germany: German Unity Day"]}`
pub type HolidayMap = BTreeMap<String, Vec<String>>;

/// A daily note as returned by `GET /api/notes?date=...`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    #[serde(default)]
    pub content: String,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NotesResponse {
    #[serde(default)]
    pub notes: Vec<Note>,
}

/// Body for `POST /api/notes` (upsert) and `POST /api/notes/new` (always create)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteRequest {
    pub date: String,
    pub content: String,
}

/// Body for `PUT /api/notes/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteContentRequest {
    pub content: String,
}

/// Body for `DELETE /api/notes` (removes every note on the date)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteDateRequest {
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorRequest {
    pub expression: String,
}

/// Reply of `POST /api/calculator`: `{"result": 4}` or `{"error": "Division by zero"}`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CalculatorResponse {
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<String>,
}

impl CalculatorResponse {
    /// The numeric result, if the server produced one
    pub fn numeric_result(&self) -> Option<f64> {
        self.result.as_ref().and_then(serde_json::Value::as_f64)
    }
}

/// Transport-level failures talking to the calendar API.
///
/// A request the server answered with `success: false` is not an `ApiError`;
/// it reaches callers as a [`MutationResponse`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_date_key() {
        let event: Event = serde_json::from_str(
            r#"{"id": 7, "title": "Dentist", "description": "", "start_date": "2024-03-05T14:30:00", "category": "General"}"#,
        )
        .unwrap();

        assert_eq!(event.date_key(), "2024-03-05");
        assert_eq!(event.end_date, None);
        assert_eq!(event.recurrence, None);
    }

    #[test]
    fn test_event_defaults_for_missing_fields() {
        let event: Event =
            serde_json::from_str(r#"{"id": 1, "title": "x", "start_date": "2024-01-01"}"#).unwrap();

        assert_eq!(event.description, "");
        assert_eq!(event.category, "General");
        // Date-only timestamps still yield a key
        assert_eq!(event.date_key(), "2024-01-01");
    }

    #[test]
    fn test_event_request_for_date() {
        let request = EventRequest::for_date("", "nothing", "2024-03-05");
        assert_eq!(request.start_date, "2024-03-05T00:00:00");
        assert_eq!(request.category, "General");
        assert_eq!(request.title, "");
    }

    #[test]
    fn test_edited_keeps_start_date() {
        let event = Event {
            id: 3,
            title: "Old".to_string(),
            description: "old".to_string(),
            start_date: "2024-03-05T09:00:00".to_string(),
            end_date: None,
            category: "Work".to_string(),
            recurrence: None,
        };

        let request = event.edited("New", "new");
        assert_eq!(request.start_date, "2024-03-05T09:00:00");
        assert_eq!(request.title, "New");
        assert_eq!(request.category, "General");
    }

    #[test]
    fn test_mutation_response_error_shape() {
        let response: MutationResponse =
            serde_json::from_str(r#"{"error": "Event not found"}"#).unwrap();
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("Event not found"));

        let response: MutationResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(response.success);
        assert!(response.error.is_none());
    }

    #[test]
    fn test_notes_response_parsing() {
        let response: NotesResponse = serde_json::from_str(
            r#"{"notes": [{"id": 4, "content": "Buy milk", "created_at": "2024-03-05T08:00:00", "updated_at": "2024-03-05T08:00:00"}]}"#,
        )
        .unwrap();
        assert_eq!(response.notes.len(), 1);
        assert_eq!(response.notes[0].content, "Buy milk");

        let empty: NotesResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.notes.is_empty());
    }

    #[test]
    fn test_calculator_response() {
        let ok: CalculatorResponse = serde_json::from_str(r#"{"result": 2.5}"#).unwrap();
        assert_eq!(ok.numeric_result(), Some(2.5));

        let int: CalculatorResponse = serde_json::from_str(r#"{"result": 4}"#).unwrap();
        assert_eq!(int.numeric_result(), Some(4.0));

        let text: CalculatorResponse = serde_json::from_str(r#"{"result": "four"}"#).unwrap();
        assert_eq!(text.numeric_result(), None);

        let err: CalculatorResponse =
            serde_json::from_str(r#"{"error": "Division by zero"}"#).unwrap();
        assert_eq!(err.numeric_result(), None);
        assert_eq!(err.error.as_deref(), Some("Division by zero"));
    }

    #[test]
    fn test_holiday_map_parsing() {
        let holidays: HolidayMap = serde_json::from_str(
            r#"{"2024-10-03": ["Germany: German Unity Day"], "2024-10-14": ["United States: Columbus Day"]}"#,
        )
        .unwrap();
        assert_eq!(holidays.len(), 2);
        assert_eq!(holidays["2024-10-03"][0], "Germany: German Unity Day");
    }

    #[test]
    fn test_api_error_messages() {
        assert_eq!(
            ApiError::Network("offline".to_string()).to_string(),
            "Network error: offline"
        );
        assert_eq!(
            ApiError::Decode("bad json".to_string()).to_string(),
            "Failed to parse response: bad json"
        );
    }
}
