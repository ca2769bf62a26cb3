pub mod use_banner;
pub mod use_calculator;
pub mod use_calendar;
pub mod use_detail;
pub mod use_event_form;
pub mod use_mutations;
pub mod use_note_form;
