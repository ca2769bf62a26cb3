//! Client-side calendar logic, independent of the browser.
//!
//! The Yew frontend owns the state and the DOM; everything it renders is
//! computed here from plain values so it can be tested natively.

pub mod api;
pub mod banner;
pub mod cache;
pub mod calculator;
pub mod calendar;
pub mod config;
pub mod date_utils;
pub mod detail;
pub mod edit;
pub mod sequence;
pub mod workflow;

pub use api::CalendarApi;
pub use banner::{Banner, BannerKind};
pub use cache::{EventCache, MonthData, NoteIndicators};
pub use calculator::{CalcKey, CalculatorSession, Evaluation, HistoryEntry};
pub use calendar::{CalendarFocus, DayCell, MonthGrid};
pub use config::ClientConfig;
pub use detail::{DetailNotes, DetailView};
pub use edit::{Draft, EditAction, EditBoard, InlineEdit, ItemKey};
pub use sequence::{MonthRequest, MonthResource, RequestTicket, ViewRequests};
pub use workflow::{EditorUpdate, Mutation, MutationOutcome, Refresh, RefreshStep};
