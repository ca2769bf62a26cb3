use calendar_domain::date_utils;
use calendar_domain::detail::editor_text;
use calendar_domain::sequence::RequestSequence;
use calendar_domain::{Banner, CalendarApi, Mutation};
use shared::NoteRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::hooks::use_mutations::MutationRequest;
use crate::services::api::ApiClient;

const DELETE_ALL_PROMPT: &str = "Are you sure you want to delete all notes for this date?";

#[derive(Clone, PartialEq)]
pub struct NoteFormState {
    pub date: String,
    pub content: String,
}

impl NoteFormState {
    fn request(&self) -> NoteRequest {
        NoteRequest {
            date: self.date.clone(),
            content: self.content.clone(),
        }
    }
}

pub struct UseNoteFormResult {
    pub state: NoteFormState,
    pub actions: UseNoteFormActions,
}

#[derive(Clone, PartialEq)]
pub struct UseNoteFormActions {
    pub on_date_change: Callback<Event>,
    pub on_content_change: Callback<InputEvent>,
    /// Switch to a date and preload its most recent note
    pub load_date: Callback<String>,
    pub clear_content: Callback<()>,
    pub save: Callback<()>,
    pub save_as_new: Callback<()>,
    pub delete_all: Callback<()>,
    pub add_for_today: Callback<()>,
}

#[hook]
pub fn use_note_form(
    api_client: &ApiClient,
    initial_date: String,
    run: &Callback<MutationRequest>,
    show_detail: &Callback<String>,
    show_banner: &Callback<Banner>,
) -> UseNoteFormResult {
    let date = use_state(move || initial_date);
    let content = use_state(String::new);
    let loads = use_mut_ref(RequestSequence::default);

    let on_date_change = {
        let date = date.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            date.set(input.value());
        })
    };

    let on_content_change = {
        let content = content.clone();
        use_callback((), move |e: InputEvent, _| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            content.set(input.value());
        })
    };

    let load_date = {
        let api_client = api_client.clone();
        let date = date.clone();
        let content = content.clone();
        let loads = loads.clone();

        use_callback((), move |next: String, _| {
            let api_client = api_client.clone();
            let content = content.clone();
            let loads = loads.clone();
            let ticket = loads.borrow_mut().issue();
            date.set(next.clone());

            spawn_local(async move {
                match api_client.get_notes(&next).await {
                    Ok(notes) => {
                        if loads.borrow().is_current(ticket) {
                            content.set(editor_text(&notes));
                        }
                    }
                    Err(e) => {
                        log::error!(target: "notes", "Failed to load notes for {}: {}", next, e);
                    }
                }
            });
        })
    };

    let clear_content = {
        let content = content.clone();
        use_callback((), move |_: (), _| content.set(String::new()))
    };

    let state = NoteFormState {
        date: (*date).clone(),
        content: (*content).clone(),
    };

    let save = use_callback(
        (state.clone(), run.clone()),
        move |_: (), (state, run)| {
            run.emit(Mutation::SaveNote(state.request()).into());
        },
    );

    let save_as_new = use_callback(
        (state.clone(), run.clone()),
        move |_: (), (state, run)| {
            run.emit(Mutation::CreateNote(state.request()).into());
        },
    );

    let delete_all = use_callback(
        (state.date.clone(), run.clone()),
        move |_: (), (date, run)| {
            if gloo::dialogs::confirm(DELETE_ALL_PROMPT) {
                run.emit(Mutation::DeleteNotesForDate { date: date.clone() }.into());
            }
        },
    );

    let add_for_today = {
        let date = date.clone();
        let content = content.clone();
        let show_detail = show_detail.clone();
        let show_banner = show_banner.clone();
        use_callback((), move |_: (), _| {
            let today = date_utils::today_key();
            date.set(today.clone());
            content.set(String::new());
            show_detail.emit(today);
            show_banner.emit(Banner::success("Ready to add note for today!"));
        })
    };

    let actions = UseNoteFormActions {
        on_date_change,
        on_content_change,
        load_date,
        clear_content,
        save,
        save_as_new,
        delete_all,
        add_for_today,
    };

    UseNoteFormResult { state, actions }
}
