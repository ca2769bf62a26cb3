//! Month grid layout for the calendar view.
//!
//! The grid always spans six weeks starting on a Sunday: the trailing days of
//! the previous month, every day of the focused month, then leading days of
//! the next month. Each cell is decorated from a [`MonthData`] snapshot; the
//! UI only turns [`DayCell`]s into markup.

use chrono::{Datelike, Days, Months, NaiveDate};
use shared::Event;

use crate::cache::MonthData;
use crate::date_utils::{self, date_key, month_name};

/// Number of day cells in a rendered month (6 weeks x 7 days)
pub const GRID_CELLS: usize = 42;

/// The month the calendar is focused on.
///
/// Stored as the first day of the month so every value is a valid date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarFocus {
    first_day: NaiveDate,
}

impl CalendarFocus {
    /// Focus for a year and month (1-12); `None` when out of range
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first_day| Self { first_day })
    }

    /// The month containing the given date
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first_day: date - Days::new(u64::from(date.day0())),
        }
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// Navigate to the previous month
    pub fn previous(self) -> Self {
        self.first_day
            .checked_sub_months(Months::new(1))
            .map_or(self, |first_day| Self { first_day })
    }

    /// Navigate to the next month
    pub fn next(self) -> Self {
        self.first_day
            .checked_add_months(Months::new(1))
            .map_or(self, |first_day| Self { first_day })
    }

    /// Header text, e.g. "March 2024"
    pub fn title(&self) -> String {
        format!("{} {}", month_name(self.month()), self.year())
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// Every date shown in the six-week grid, in display order
    pub fn grid_dates(&self) -> Vec<NaiveDate> {
        // Sunday = 0, Monday = 1, ..., Saturday = 6
        let leading = u64::from(self.first_day.weekday().num_days_from_sunday());
        let start = self
            .first_day
            .checked_sub_days(Days::new(leading))
            .unwrap_or(self.first_day);

        start.iter_days().take(GRID_CELLS).collect()
    }

    /// Date keys for every grid cell
    pub fn grid_keys(&self) -> Vec<String> {
        self.grid_dates().into_iter().map(date_key).collect()
    }
}

/// Which country a holiday marker belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolidayCountry {
    Germany,
    UnitedStates,
}

impl HolidayCountry {
    /// Holiday strings are prefixed with the country name; only Germany is singled out
    pub fn from_description(description: &str) -> Self {
        if description.contains("Germany:") {
            HolidayCountry::Germany
        } else {
            HolidayCountry::UnitedStates
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HolidayCountry::Germany => "DE",
            HolidayCountry::UnitedStates => "US",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HolidayMarker {
    pub country: HolidayCountry,
    /// Full holiday string, shown as the tooltip
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventMarker {
    pub id: i64,
    pub title: String,
    pub description: String,
}

impl From<&Event> for EventMarker {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id,
            title: event.title.clone(),
            description: event.description.clone(),
        }
    }
}

/// One cell of the month grid
#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub key: String,
    pub day: u32,
    /// Padding cell from the previous or next month
    pub other_month: bool,
    pub is_today: bool,
    pub events: Vec<EventMarker>,
    pub holidays: Vec<HolidayMarker>,
    pub note_count: usize,
}

impl DayCell {
    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }

    pub fn has_holidays(&self) -> bool {
        !self.holidays.is_empty()
    }

    pub fn has_notes(&self) -> bool {
        self.note_count > 0
    }

    /// Tooltip for the note marker
    pub fn note_tooltip(&self) -> String {
        format!("Has {} note(s)", self.note_count)
    }
}

/// A fully decorated month view
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGrid {
    pub focus: CalendarFocus,
    pub title: String,
    pub headers: [&'static str; 7],
    pub cells: Vec<DayCell>,
}

impl MonthGrid {
    /// Lay out the month and decorate every cell from the cached data
    pub fn build(focus: CalendarFocus, today: NaiveDate, data: &MonthData) -> Self {
        let cells: Vec<DayCell> = focus
            .grid_dates()
            .into_iter()
            .map(|date| {
                let key = date_key(date);
                DayCell {
                    date,
                    day: date.day(),
                    other_month: !focus.contains(date),
                    is_today: date == today,
                    events: data.events.on(&key).iter().map(EventMarker::from).collect(),
                    holidays: data
                        .holidays
                        .get(&key)
                        .map(|names| {
                            names
                                .iter()
                                .map(|name| HolidayMarker {
                                    country: HolidayCountry::from_description(name),
                                    description: name.clone(),
                                })
                                .collect()
                        })
                        .unwrap_or_default(),
                    note_count: data.note_counts.count(&key),
                    key,
                }
            })
            .collect();

        log::debug!(
            target: "calendar",
            "built grid for {} ({} days in month, {} cells)",
            focus.title(),
            cells.iter().filter(|c| !c.other_month).count(),
            cells.len()
        );

        Self {
            focus,
            title: focus.title(),
            headers: date_utils::WEEKDAY_NAMES,
            cells,
        }
    }

    /// Rows of seven cells, Sunday first
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(7)
    }

    pub fn cell(&self, key: &str) -> Option<&DayCell> {
        self.cells.iter().find(|c| c.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{EventCache, NoteIndicators};
    use shared::HolidayMap;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn event(id: i64, title: &str, start_date: &str) -> Event {
        Event {
            id,
            title: title.to_string(),
            description: format!("{} details", title),
            start_date: start_date.to_string(),
            end_date: None,
            category: "General".to_string(),
            recurrence: None,
        }
    }

    #[test]
    fn test_navigation() {
        let june = CalendarFocus::new(2025, 6).unwrap();
        assert_eq!(june.previous(), CalendarFocus::new(2025, 5).unwrap());
        assert_eq!(june.next(), CalendarFocus::new(2025, 7).unwrap());

        let january = CalendarFocus::new(2025, 1).unwrap();
        assert_eq!(january.previous(), CalendarFocus::new(2024, 12).unwrap());

        let december = CalendarFocus::new(2025, 12).unwrap();
        assert_eq!(december.next(), CalendarFocus::new(2026, 1).unwrap());

        assert!(CalendarFocus::new(2025, 13).is_none());
        assert!(CalendarFocus::new(2025, 0).is_none());
    }

    #[test]
    fn test_containing() {
        let focus = CalendarFocus::containing(date(2024, 3, 17));
        assert_eq!(focus.year(), 2024);
        assert_eq!(focus.month(), 3);
        assert_eq!(focus.first_day(), date(2024, 3, 1));
        assert_eq!(focus.title(), "March 2024");
    }

    #[test]
    fn test_grid_always_has_42_cells_and_7_headers() {
        let today = date(2026, 10, 18);
        let data = MonthData::default();

        for year in [1999, 2000, 2023, 2024, 2025, 2100] {
            for month in 1..=12 {
                let focus = CalendarFocus::new(year, month).unwrap();
                let grid = MonthGrid::build(focus, today, &data);
                assert_eq!(grid.cells.len(), GRID_CELLS, "{}-{}", year, month);
                assert_eq!(grid.headers.len(), 7);
                assert_eq!(grid.weeks().count(), 6);

                let in_month = grid.cells.iter().filter(|c| !c.other_month).count();
                let month_length = focus.next().first_day() - focus.first_day();
                assert_eq!(in_month as i64, month_length.num_days());
            }
        }
    }

    #[test]
    fn test_grid_layout_march_2024() {
        // March 1st 2024 is a Friday: five leading days from February
        let focus = CalendarFocus::new(2024, 3).unwrap();
        let grid = MonthGrid::build(focus, date(2026, 10, 18), &MonthData::default());

        assert_eq!(grid.cells[0].key, "2024-02-25");
        assert!(grid.cells[0].other_month);
        assert_eq!(grid.cells[5].key, "2024-03-01");
        assert!(!grid.cells[5].other_month);
        assert_eq!(grid.cells[35].key, "2024-03-31");
        assert_eq!(grid.cells[36].key, "2024-04-01");
        assert!(grid.cells[36].other_month);
        assert_eq!(grid.cells[41].key, "2024-04-06");
    }

    #[test]
    fn test_adjacent_months_across_year_boundary() {
        let january = CalendarFocus::new(2025, 1).unwrap();
        let grid = MonthGrid::build(january, date(2026, 10, 18), &MonthData::default());
        // January 1st 2025 is a Wednesday
        assert_eq!(grid.cells[0].key, "2024-12-29");

        let december = CalendarFocus::new(2025, 12).unwrap();
        let grid = MonthGrid::build(december, date(2026, 10, 18), &MonthData::default());
        assert_eq!(grid.cells[41].key, "2026-01-10");
    }

    #[test]
    fn test_grid_starting_on_sunday_has_no_leading_days() {
        // September 1st 2024 is a Sunday
        let focus = CalendarFocus::new(2024, 9).unwrap();
        let grid = MonthGrid::build(focus, date(2026, 10, 18), &MonthData::default());
        assert_eq!(grid.cells[0].key, "2024-09-01");
        assert!(!grid.cells[0].other_month);
    }

    #[test]
    fn test_today_flag() {
        let today = date(2026, 10, 18);
        let data = MonthData::default();

        let current = MonthGrid::build(CalendarFocus::containing(today), today, &data);
        let flagged: Vec<_> = current.cells.iter().filter(|c| c.is_today).collect();
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].key, "2026-10-18");
        assert!(!flagged[0].other_month);

        let distant = MonthGrid::build(CalendarFocus::new(2026, 6).unwrap(), today, &data);
        assert!(distant.cells.iter().all(|c| !c.is_today));
    }

    #[test]
    fn test_event_markers_grouped_by_date() {
        let data = MonthData {
            events: EventCache::from_events(vec![
                event(1, "Standup", "2024-03-05T00:00:00"),
                event(2, "Review", "2024-03-05T00:00:00"),
                event(3, "Lunch", "2024-03-06T12:00:00"),
            ]),
            ..MonthData::default()
        };

        let grid = MonthGrid::build(CalendarFocus::new(2024, 3).unwrap(), date(2026, 10, 18), &data);
        let cell = grid.cell("2024-03-05").unwrap();
        assert!(cell.has_events());
        assert_eq!(cell.events.len(), 2);
        assert_eq!(cell.events[0].title, "Standup");
        assert_eq!(cell.events[0].description, "Standup details");
        assert_eq!(grid.cell("2024-03-06").unwrap().events.len(), 1);
        assert!(!grid.cell("2024-03-07").unwrap().has_events());
    }

    #[test]
    fn test_holiday_markers() {
        let mut holidays = HolidayMap::new();
        holidays.insert(
            "2024-10-03".to_string(),
            vec!["Germany: German Unity Day".to_string()],
        );
        holidays.insert(
            "2024-10-14".to_string(),
            vec!["United States: Columbus Day".to_string()],
        );
        let data = MonthData {
            holidays,
            ..MonthData::default()
        };

        let grid = MonthGrid::build(CalendarFocus::new(2024, 10).unwrap(), date(2026, 10, 18), &data);
        let unity = grid.cell("2024-10-03").unwrap();
        assert_eq!(unity.holidays[0].country.label(), "DE");
        assert_eq!(unity.holidays[0].description, "Germany: German Unity Day");
        let columbus = grid.cell("2024-10-14").unwrap();
        assert_eq!(columbus.holidays[0].country, HolidayCountry::UnitedStates);
        assert_eq!(columbus.holidays[0].country.label(), "US");
    }

    #[test]
    fn test_note_markers() {
        let data = MonthData {
            note_counts: NoteIndicators::from_counts(vec![("2024-03-05".to_string(), 2)]),
            ..MonthData::default()
        };
        let grid = MonthGrid::build(CalendarFocus::new(2024, 3).unwrap(), date(2026, 10, 18), &data);

        let cell = grid.cell("2024-03-05").unwrap();
        assert!(cell.has_notes());
        assert_eq!(cell.note_tooltip(), "Has 2 note(s)");
        assert!(!grid.cell("2024-03-04").unwrap().has_notes());
    }

    #[test]
    fn test_grid_keys_match_cells() {
        let focus = CalendarFocus::new(2024, 2).unwrap();
        let keys = focus.grid_keys();
        let grid = MonthGrid::build(focus, date(2026, 10, 18), &MonthData::default());
        assert_eq!(keys.len(), GRID_CELLS);
        assert!(grid.cells.iter().zip(&keys).all(|(c, k)| &c.key == k));
    }
}
