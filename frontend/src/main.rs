use std::rc::Rc;

use calendar_domain::date_utils;
use calendar_domain::{CalendarFocus, ClientConfig, DetailView, Refresh, RefreshStep, ViewRequests};
use log::LevelFilter;
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::banner::MessageBanner;
use components::calculator::Calculator;
use components::calendar::Calendar;
use components::detail_panel::DetailPanel;
use components::forms::{EventForm, NoteForm};
use hooks::use_banner::use_banner;
use hooks::use_calculator::use_calculator;
use hooks::use_calendar::use_calendar;
use hooks::use_detail::use_detail;
use hooks::use_event_form::use_event_form;
use hooks::use_mutations::use_mutations;
use hooks::use_note_form::use_note_form;
use services::api::ApiClient;

#[derive(Properties, PartialEq)]
struct AppProps {
    config: Rc<ClientConfig>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let config = &props.config;
    let api_client = use_memo(config.api_base_url.clone(), |base_url| {
        ApiClient::with_base_url(base_url.clone())
    });
    let requests = use_mut_ref(|| ViewRequests::new(CalendarFocus::containing(date_utils::today())));
    let today_key = date_utils::today_key();

    let banner = use_banner(config.banner_timeout_ms);
    let calendar = use_calendar(&api_client, &config.holiday_countries, &requests);
    let detail = use_detail(&api_client, &requests);
    let calculator = use_calculator(&api_client, config.history_limit);

    // Refreshes after a mutation need the note form, which itself runs
    // mutations; the cell breaks that cycle.
    let note_editor = use_mut_ref(|| Option::<(Callback<String>, Callback<()>)>::None);

    let on_refresh = {
        let show_detail = detail.actions.show.clone();
        let reload_events = calendar.actions.reload_events.clone();
        let reload_note_indicators = calendar.actions.reload_note_indicators.clone();
        let note_editor = note_editor.clone();
        Callback::from(move |refresh: Refresh| {
            for step in refresh.steps() {
                match step {
                    RefreshStep::ShowDetail(date) => show_detail.emit(date),
                    RefreshStep::ReloadEvents => reload_events.emit(()),
                    RefreshStep::ReloadNoteIndicators => reload_note_indicators.emit(()),
                    RefreshStep::LoadEditor(date) => {
                        if let Some((load_date, _)) = note_editor.borrow().as_ref() {
                            load_date.emit(date);
                        }
                    }
                    RefreshStep::ClearEditor => {
                        if let Some((_, clear_content)) = note_editor.borrow().as_ref() {
                            clear_content.emit(());
                        }
                    }
                }
            }
        })
    };

    let run = use_mutations(&api_client, &banner.show, &on_refresh);
    let event_form = use_event_form(today_key.clone(), &run);
    let note_form = use_note_form(
        &api_client,
        today_key,
        &run,
        &detail.actions.show,
        &banner.show,
    );
    *note_editor.borrow_mut() = Some((
        note_form.actions.load_date.clone(),
        note_form.actions.clear_content.clone(),
    ));

    let on_select_date = {
        let show_detail = detail.actions.show.clone();
        let set_event_date = event_form.actions.set_date.clone();
        let load_note_date = note_form.actions.load_date.clone();
        Callback::from(move |date: String| {
            set_event_date.emit(date.clone());
            load_note_date.emit(date.clone());
            show_detail.emit(date);
        })
    };

    let detail_view = detail.state.selected.as_ref().map(|date| {
        DetailView::build(
            date,
            date_utils::today(),
            calendar.state.events.on(date),
            &detail.state.notes,
        )
    });

    html! {
        <>
            <MessageBanner banner={banner.banner.clone()} on_dismiss={banner.dismiss.clone()} />
            <header class="app-header">
                <div class="container">
                    <h1><i class="fas fa-calendar-alt"></i>{" Calendar"}</h1>
                </div>
            </header>
            <main class="container">
                <div class="row">
                    <div class="col-lg-8">
                        <Calendar
                            grid={calendar.state.grid.clone()}
                            on_prev_month={calendar.actions.prev_month.clone()}
                            on_next_month={calendar.actions.next_month.clone()}
                            {on_select_date}
                        />
                        {match detail_view {
                            Some(view) => html! {
                                <DetailPanel
                                    {view}
                                    edits={detail.state.edits.clone()}
                                    on_edit={detail.actions.edit.clone()}
                                    run={run.clone()}
                                    on_load_into_form={event_form.actions.load_event.clone()}
                                />
                            },
                            None => html! {
                                <div id="event-details-display" class="event-details-display">
                                    <p class="text-muted">{"Select a date to see its events and notes."}</p>
                                </div>
                            },
                        }}
                    </div>
                    <aside class="col-lg-4">
                        <EventForm state={event_form.state.clone()} actions={event_form.actions.clone()} />
                        <NoteForm state={note_form.state.clone()} actions={note_form.actions.clone()} />
                        <Calculator session={calculator.session.clone()} on_press={calculator.press.clone()} />
                    </aside>
                </div>
            </main>
        </>
    }
}

fn main() {
    services::logging::init(LevelFilter::Debug);
    let config = services::page_config::load();
    yew::Renderer::<App>::with_props(AppProps {
        config: Rc::new(config),
    })
    .render();
}
