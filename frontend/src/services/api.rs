use async_trait::async_trait;
use calendar_domain::CalendarApi;
use gloo::net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{
    ApiError, CalculatorRequest, CalculatorResponse, Event, EventRequest, HolidayMap,
    MutationResponse, Note, NoteContentRequest, NoteDateRequest, NoteRequest, NotesResponse,
};

/// API client for communicating with the calendar server
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    /// Create a client that talks to the page's own origin
    pub fn new() -> Self {
        Self {
            base_url: String::new(),
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and decode its JSON body.
    ///
    /// Error replies (4xx/5xx) still carry a JSON body such as
    /// `{"error": "..."}`, so the body is decoded regardless of status.
    async fn fetch<T: DeserializeOwned>(&self, request: Request) -> Result<T, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if !response.ok() {
            log::debug!(
                target: "api",
                "{} answered {} {}",
                response.url(),
                response.status(),
                response.status_text()
            );
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn send_json<B, T>(&self, builder: RequestBuilder, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let request = builder
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        self.fetch(request).await
    }

    async fn send_empty<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let request = builder
            .build()
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        self.fetch(request).await
    }
}

#[async_trait(?Send)]
impl CalendarApi for ApiClient {
    async fn get_events(&self, year: i32, month: u32) -> Result<Vec<Event>, ApiError> {
        let url = self.url("/api/events");
        let builder = Request::get(&url).query([("year", year.to_string()), ("month", month.to_string())]);
        self.send_empty(builder).await
    }

    async fn get_holidays(
        &self,
        year: i32,
        month: u32,
        countries: &[String],
    ) -> Result<HolidayMap, ApiError> {
        let url = self.url("/api/holidays");
        let mut params = vec![("year", year.to_string()), ("month", month.to_string())];
        params.extend(countries.iter().map(|c| ("countries", c.clone())));
        self.send_empty(Request::get(&url).query(params)).await
    }

    async fn get_notes(&self, date: &str) -> Result<Vec<Note>, ApiError> {
        let url = self.url("/api/notes");
        let response: NotesResponse = self
            .send_empty(Request::get(&url).query([("date", date)]))
            .await?;
        Ok(response.notes)
    }

    async fn create_event(&self, request: &EventRequest) -> Result<MutationResponse, ApiError> {
        self.send_json(Request::post(&self.url("/api/events")), request)
            .await
    }

    async fn update_event(
        &self,
        id: i64,
        request: &EventRequest,
    ) -> Result<MutationResponse, ApiError> {
        let url = self.url(&format!("/api/events/{}", id));
        self.send_json(Request::put(&url), request).await
    }

    async fn delete_event(&self, id: i64) -> Result<MutationResponse, ApiError> {
        let url = self.url(&format!("/api/events/{}", id));
        self.send_empty(Request::delete(&url)).await
    }

    async fn save_note(&self, request: &NoteRequest) -> Result<MutationResponse, ApiError> {
        self.send_json(Request::post(&self.url("/api/notes")), request)
            .await
    }

    async fn create_note(&self, request: &NoteRequest) -> Result<MutationResponse, ApiError> {
        self.send_json(Request::post(&self.url("/api/notes/new")), request)
            .await
    }

    async fn update_note(
        &self,
        id: i64,
        request: &NoteContentRequest,
    ) -> Result<MutationResponse, ApiError> {
        let url = self.url(&format!("/api/notes/{}", id));
        self.send_json(Request::put(&url), request).await
    }

    async fn delete_note(&self, id: i64) -> Result<MutationResponse, ApiError> {
        let url = self.url(&format!("/api/notes/{}", id));
        self.send_empty(Request::delete(&url)).await
    }

    async fn delete_notes_for_date(
        &self,
        request: &NoteDateRequest,
    ) -> Result<MutationResponse, ApiError> {
        self.send_json(Request::delete(&self.url("/api/notes")), request)
            .await
    }

    async fn calculate(
        &self,
        request: &CalculatorRequest,
    ) -> Result<CalculatorResponse, ApiError> {
        self.send_json(Request::post(&self.url("/api/calculator")), request)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_same_origin_by_default() {
        let client = ApiClient::default();
        assert_eq!(client.url("/api/events"), "/api/events");
    }

    #[wasm_bindgen_test]
    fn test_custom_base_url_trailing_slash() {
        let client = ApiClient::with_base_url("http://localhost:8000/".to_string());
        assert_eq!(client.url("/api/notes/new"), "http://localhost:8000/api/notes/new");
    }
}
