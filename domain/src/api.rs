use async_trait::async_trait;
use shared::{
    ApiError, CalculatorRequest, CalculatorResponse, Event, EventRequest, HolidayMap,
    MutationResponse, Note, NoteContentRequest, NoteDateRequest, NoteRequest,
};

/// The calendar server's REST surface.
///
/// Implemented over `gloo::net` in the browser and by in-memory fakes in
/// tests. Futures are not `Send`: everything runs on the single wasm event
/// loop.
#[async_trait(?Send)]
pub trait CalendarApi {
    /// `GET /api/events?year=&month=`
    async fn get_events(&self, year: i32, month: u32) -> Result<Vec<Event>, ApiError>;

    /// `GET /api/holidays?year=&month=&countries=..`
    async fn get_holidays(
        &self,
        year: i32,
        month: u32,
        countries: &[String],
    ) -> Result<HolidayMap, ApiError>;

    /// `GET /api/notes?date=`
    async fn get_notes(&self, date: &str) -> Result<Vec<Note>, ApiError>;

    async fn create_event(&self, request: &EventRequest) -> Result<MutationResponse, ApiError>;

    async fn update_event(
        &self,
        id: i64,
        request: &EventRequest,
    ) -> Result<MutationResponse, ApiError>;

    async fn delete_event(&self, id: i64) -> Result<MutationResponse, ApiError>;

    /// Upsert the note for a date
    async fn save_note(&self, request: &NoteRequest) -> Result<MutationResponse, ApiError>;

    /// Always add another note for the date
    async fn create_note(&self, request: &NoteRequest) -> Result<MutationResponse, ApiError>;

    async fn update_note(
        &self,
        id: i64,
        request: &NoteContentRequest,
    ) -> Result<MutationResponse, ApiError>;

    async fn delete_note(&self, id: i64) -> Result<MutationResponse, ApiError>;

    async fn delete_notes_for_date(
        &self,
        request: &NoteDateRequest,
    ) -> Result<MutationResponse, ApiError>;

    /// `POST /api/calculator`
    async fn calculate(&self, request: &CalculatorRequest)
        -> Result<CalculatorResponse, ApiError>;
}
