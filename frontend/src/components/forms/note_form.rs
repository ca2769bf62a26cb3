use yew::prelude::*;

use crate::hooks::use_note_form::{NoteFormState, UseNoteFormActions};

#[derive(Properties, PartialEq)]
pub struct NoteFormProps {
    pub state: NoteFormState,
    pub actions: UseNoteFormActions,
}

fn button(class: &'static str, icon: &'static str, label: &'static str, action: &Callback<()>) -> Html {
    let action = action.clone();
    let onclick = Callback::from(move |_: MouseEvent| action.emit(()));
    html! {
        <button type="button" class={class} {onclick}>
            <i class={icon}></i>{" "}{label}
        </button>
    }
}

#[function_component(NoteForm)]
pub fn note_form(props: &NoteFormProps) -> Html {
    let state = &props.state;
    let actions = &props.actions;

    html! {
        <section class="card note-form-section">
            <div class="card-header">
                <h5><i class="fas fa-sticky-note"></i>{" Daily Notes"}</h5>
            </div>
            <div class="card-body">
                <div class="mb-3">
                    <label for="note-date" class="form-label">{"Date"}</label>
                    <input
                        type="date"
                        id="note-date"
                        class="form-control"
                        value={state.date.clone()}
                        onchange={actions.on_date_change.clone()}
                    />
                </div>
                <div class="mb-3">
                    <label for="note-content" class="form-label">{"Note"}</label>
                    <textarea
                        id="note-content"
                        class="form-control"
                        rows="4"
                        placeholder="Write a note for this date..."
                        value={state.content.clone()}
                        oninput={actions.on_content_change.clone()}
                    />
                </div>
                <div class="note-buttons">
                    {button("btn btn-primary me-1", "fas fa-save", "Save Note", &actions.save)}
                    {button("btn btn-success me-1", "fas fa-plus", "Save as New Note", &actions.save_as_new)}
                    {button("btn btn-danger me-1", "fas fa-trash", "Delete All Notes", &actions.delete_all)}
                    {button("btn btn-outline-primary", "fas fa-calendar-day", "Add Note for Today", &actions.add_for_today)}
                </div>
            </div>
        </section>
    }
}
