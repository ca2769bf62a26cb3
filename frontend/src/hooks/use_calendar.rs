use std::cell::RefCell;
use std::rc::Rc;

use calendar_domain::date_utils;
use calendar_domain::workflow;
use calendar_domain::{
    CalendarFocus, EventCache, MonthData, MonthGrid, MonthResource, NoteIndicators, ViewRequests,
};
use shared::HolidayMap;
use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::services::api::ApiClient;

#[derive(Clone, PartialEq)]
pub struct CalendarState {
    pub focus: CalendarFocus,
    pub grid: MonthGrid,
    /// Events of the focused month, also feeding the detail panel
    pub events: EventCache,
}

pub struct UseCalendarResult {
    pub state: CalendarState,
    pub actions: UseCalendarActions,
}

#[derive(Clone)]
pub struct UseCalendarActions {
    pub prev_month: Callback<MouseEvent>,
    pub next_month: Callback<MouseEvent>,
    pub reload_events: Callback<()>,
    pub reload_note_indicators: Callback<()>,
}

/// Month navigation plus the data decorating the grid.
///
/// The focused month lives in the shared [`ViewRequests`]; reloads read it
/// when they start, so a reload emitted from an older render still fetches
/// the month on screen.
#[hook]
pub fn use_calendar(
    api_client: &ApiClient,
    holiday_countries: &[String],
    requests: &Rc<RefCell<ViewRequests>>,
) -> UseCalendarResult {
    let focus = use_state({
        let requests = requests.clone();
        move || requests.borrow().focus()
    });
    let events = use_state(EventCache::default);
    let holidays = use_state(HolidayMap::new);
    let note_counts = use_state(NoteIndicators::default);

    let reload_events = {
        let api_client = api_client.clone();
        let requests = requests.clone();
        let events = events.clone();

        use_callback((), move |_: (), _| {
            let api_client = api_client.clone();
            let requests = requests.clone();
            let events = events.clone();
            let request = requests.borrow_mut().begin(MonthResource::Events);

            spawn_local(async move {
                match workflow::load_events(&api_client, request.focus).await {
                    Ok(cache) => {
                        if requests.borrow().is_current(MonthResource::Events, request.ticket) {
                            events.set(cache);
                        } else {
                            log::debug!(target: "calendar", "Discarding stale events for {}", request.focus.title());
                        }
                    }
                    Err(e) => {
                        log::error!(target: "calendar", "Failed to load events: {}", e);
                    }
                }
            });
        })
    };

    let reload_holidays = {
        let api_client = api_client.clone();
        let requests = requests.clone();
        let holidays = holidays.clone();

        use_callback(holiday_countries.to_vec(), move |_: (), countries| {
            let api_client = api_client.clone();
            let requests = requests.clone();
            let holidays = holidays.clone();
            let countries = countries.clone();
            let request = requests.borrow_mut().begin(MonthResource::Holidays);

            spawn_local(async move {
                match workflow::load_holidays(&api_client, request.focus, &countries).await {
                    Ok(map) => {
                        if requests.borrow().is_current(MonthResource::Holidays, request.ticket) {
                            holidays.set(map);
                        }
                    }
                    Err(e) => {
                        log::error!(target: "calendar", "Failed to load holidays: {}", e);
                    }
                }
            });
        })
    };

    let reload_note_indicators = {
        let api_client = api_client.clone();
        let requests = requests.clone();
        let note_counts = note_counts.clone();

        use_callback((), move |_: (), _| {
            let api_client = api_client.clone();
            let requests = requests.clone();
            let note_counts = note_counts.clone();
            let request = requests.borrow_mut().begin(MonthResource::NoteIndicators);
            let keys = request.focus.grid_keys();

            spawn_local(async move {
                let indicators = workflow::load_note_indicators(&api_client, &keys).await;
                if requests
                    .borrow()
                    .is_current(MonthResource::NoteIndicators, request.ticket)
                {
                    note_counts.set(indicators);
                }
            });
        })
    };

    let navigate = {
        let requests = requests.clone();
        let focus = focus.clone();
        use_callback((), move |step: fn(CalendarFocus) -> CalendarFocus, _| {
            let next = step(requests.borrow().focus());
            requests.borrow_mut().focus_on(next);
            focus.set(next);
        })
    };

    let prev_month = {
        let navigate = navigate.clone();
        use_callback((), move |_: MouseEvent, _| navigate.emit(CalendarFocus::previous))
    };

    let next_month = {
        let navigate = navigate.clone();
        use_callback((), move |_: MouseEvent, _| navigate.emit(CalendarFocus::next))
    };

    // Reload everything the grid shows whenever the month changes
    use_effect_with(*focus, {
        let reload_events = reload_events.clone();
        let reload_holidays = reload_holidays.clone();
        let reload_note_indicators = reload_note_indicators.clone();
        move |_| {
            reload_events.emit(());
            reload_holidays.emit(());
            reload_note_indicators.emit(());
            || ()
        }
    });

    let data = MonthData {
        events: (*events).clone(),
        holidays: (*holidays).clone(),
        note_counts: (*note_counts).clone(),
    };
    let grid = MonthGrid::build(*focus, date_utils::today(), &data);

    let state = CalendarState {
        focus: *focus,
        grid,
        events: data.events,
    };

    let actions = UseCalendarActions {
        prev_month,
        next_month,
        reload_events,
        reload_note_indicators,
    };

    UseCalendarResult { state, actions }
}
