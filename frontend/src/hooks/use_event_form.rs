use calendar_domain::Mutation;
use shared::{Event as CalendarEvent, EventRequest};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::hooks::use_mutations::MutationRequest;

#[derive(Clone, PartialEq)]
pub struct EventFormState {
    pub title: String,
    pub description: String,
    pub date: String,
    /// Set while an existing event is loaded into the form
    pub editing_id: Option<i64>,
}

impl EventFormState {
    pub fn submit_label(&self) -> &'static str {
        if self.editing_id.is_some() {
            "Update Event"
        } else {
            "Save Event"
        }
    }

    /// Mutation the form submits in its current mode
    pub fn mutation(&self) -> Mutation {
        let request = EventRequest::for_date(&self.title, &self.description, &self.date);
        match self.editing_id {
            Some(id) => Mutation::UpdateEvent { id, request },
            None => Mutation::CreateEvent(request),
        }
    }
}

pub struct UseEventFormResult {
    pub state: EventFormState,
    pub actions: UseEventFormActions,
}

#[derive(Clone, PartialEq)]
pub struct UseEventFormActions {
    pub on_title_change: Callback<InputEvent>,
    pub on_description_change: Callback<InputEvent>,
    pub on_date_change: Callback<Event>,
    pub set_date: Callback<String>,
    /// Switch the form to edit mode for an existing event
    pub load_event: Callback<CalendarEvent>,
    pub cancel_edit: Callback<()>,
    pub submit: Callback<()>,
}

#[hook]
pub fn use_event_form(initial_date: String, run: &Callback<MutationRequest>) -> UseEventFormResult {
    let title = use_state(String::new);
    let description = use_state(String::new);
    let date = use_state(move || initial_date);
    let editing_id = use_state(|| Option::<i64>::None);

    let on_title_change = {
        let title = title.clone();
        use_callback((), move |e: InputEvent, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            title.set(input.value());
        })
    };

    let on_description_change = {
        let description = description.clone();
        use_callback((), move |e: InputEvent, _| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            description.set(input.value());
        })
    };

    let on_date_change = {
        let date = date.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            date.set(input.value());
        })
    };

    let set_date = {
        let date = date.clone();
        use_callback((), move |next: String, _| date.set(next))
    };

    let load_event = {
        let title = title.clone();
        let description = description.clone();
        let date = date.clone();
        let editing_id = editing_id.clone();
        use_callback((), move |event: CalendarEvent, _| {
            title.set(event.title.clone());
            description.set(event.description.clone());
            date.set(event.date_key().to_string());
            editing_id.set(Some(event.id));
        })
    };

    let reset = {
        let title = title.clone();
        let description = description.clone();
        let editing_id = editing_id.clone();
        // The date is kept so several entries can be added for the same day
        use_callback((), move |_: (), _| {
            title.set(String::new());
            description.set(String::new());
            editing_id.set(None);
        })
    };

    let state = EventFormState {
        title: (*title).clone(),
        description: (*description).clone(),
        date: (*date).clone(),
        editing_id: *editing_id,
    };

    let submit = {
        let reset = reset.clone();
        use_callback((state.clone(), run.clone()), move |_: (), (state, run)| {
            let reset = reset.clone();
            let on_settled = Callback::from(move |succeeded: bool| {
                if succeeded {
                    reset.emit(());
                }
            });
            run.emit(MutationRequest::new(state.mutation()).on_settled(on_settled));
        })
    };

    let actions = UseEventFormActions {
        on_title_change,
        on_description_change,
        on_date_change,
        set_date,
        load_event,
        cancel_edit: reset,
        submit,
    };

    UseEventFormResult { state, actions }
}
