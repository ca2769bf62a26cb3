pub mod banner;
pub mod calculator;
pub mod calendar;
pub mod detail_panel;
pub mod forms;
