use yew::prelude::*;

use crate::hooks::use_event_form::{EventFormState, UseEventFormActions};

#[derive(Properties, PartialEq)]
pub struct EventFormProps {
    pub state: EventFormState,
    pub actions: UseEventFormActions,
}

#[function_component(EventForm)]
pub fn event_form(props: &EventFormProps) -> Html {
    let state = &props.state;
    let actions = &props.actions;

    let onsubmit = {
        let submit = actions.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    html! {
        <section class="card event-form-section">
            <div class="card-header">
                <h5><i class="fas fa-calendar-plus"></i>{" Add Event"}</h5>
            </div>
            <div class="card-body">
                <form id="event-form" {onsubmit}>
                    <div class="mb-3">
                        <label for="event-title" class="form-label">{"Title"}</label>
                        <input
                            type="text"
                            id="event-title"
                            class="form-control"
                            value={state.title.clone()}
                            oninput={actions.on_title_change.clone()}
                        />
                    </div>
                    <div class="mb-3">
                        <label for="event-description" class="form-label">{"Description"}</label>
                        <textarea
                            id="event-description"
                            class="form-control"
                            rows="3"
                            value={state.description.clone()}
                            oninput={actions.on_description_change.clone()}
                        />
                    </div>
                    <div class="mb-3">
                        <label for="event-date" class="form-label">{"Date"}</label>
                        <input
                            type="date"
                            id="event-date"
                            class="form-control"
                            value={state.date.clone()}
                            onchange={actions.on_date_change.clone()}
                        />
                    </div>
                    <button type="submit" class="btn btn-primary">
                        <i class="fas fa-save"></i>{" "}{state.submit_label()}
                    </button>
                    {if state.editing_id.is_some() {
                        let cancel_edit = actions.cancel_edit.clone();
                        html! {
                            <button
                                type="button"
                                class="btn btn-secondary ms-2"
                                onclick={Callback::from(move |_: MouseEvent| cancel_edit.emit(()))}
                            >
                                {"Cancel"}
                            </button>
                        }
                    } else {
                        html! {}
                    }}
                </form>
            </div>
        </section>
    }
}
