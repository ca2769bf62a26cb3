use calendar_domain::calendar::{DayCell, HolidayCountry};
use calendar_domain::MonthGrid;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CalendarProps {
    pub grid: MonthGrid,
    pub on_prev_month: Callback<MouseEvent>,
    pub on_next_month: Callback<MouseEvent>,
    /// Receives the date key of the clicked cell
    pub on_select_date: Callback<String>,
}

/// CSS classes of a day cell
pub fn day_classes(cell: &DayCell) -> Classes {
    classes!(
        "calendar-day",
        cell.other_month.then_some("other-month"),
        cell.is_today.then_some("today"),
        cell.has_events().then_some("has-event"),
        cell.has_holidays().then_some("has-holiday"),
        cell.has_notes().then_some("has-note"),
    )
}

#[function_component(Calendar)]
pub fn calendar(props: &CalendarProps) -> Html {
    let grid = &props.grid;

    html! {
        <div class="calendar">
            <div class="calendar-header">
                <button class="btn btn-outline-primary" onclick={props.on_prev_month.clone()} title="Previous month">
                    <i class="fas fa-chevron-left"></i>
                </button>
                <h3 id="current-month-year">{&grid.title}</h3>
                <button class="btn btn-outline-primary" onclick={props.on_next_month.clone()} title="Next month">
                    <i class="fas fa-chevron-right"></i>
                </button>
            </div>
            <div class="calendar-grid" id="calendar-grid">
                {for grid.headers.iter().map(|name| html! {
                    <div class="calendar-day-header">{*name}</div>
                })}
                {for grid.cells.iter().map(|cell| {
                    let onclick = {
                        let on_select_date = props.on_select_date.clone();
                        let key = cell.key.clone();
                        Callback::from(move |_: MouseEvent| on_select_date.emit(key.clone()))
                    };

                    html! {
                        <div class={day_classes(cell)} key={cell.key.clone()} {onclick}>
                            <div class="day-number">{cell.day}</div>
                            {for cell.events.iter().map(|event| html! {
                                <div class="event-indicator" title={event.description.clone()}>
                                    {&event.title}
                                </div>
                            })}
                            {for cell.holidays.iter().map(|holiday| html! {
                                <div
                                    class={classes!(
                                        "holiday-indicator",
                                        (holiday.country == HolidayCountry::Germany).then_some("germany"),
                                    )}
                                    title={holiday.description.clone()}
                                >
                                    {holiday.country.label()}
                                </div>
                            })}
                            {if cell.has_notes() {
                                html! {
                                    <div class="note-indicator" title={cell.note_tooltip()}>{"N"}</div>
                                }
                            } else {
                                html! {}
                            }}
                        </div>
                    }
                })}
            </div>
        </div>
    }
}
