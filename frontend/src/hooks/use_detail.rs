use std::cell::RefCell;
use std::rc::Rc;

use calendar_domain::workflow;
use calendar_domain::{DetailNotes, EditAction, EditBoard, ItemKey, ViewRequests};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;

/// Inline edit state of the detail panel, as a Yew reducer
#[derive(Default, PartialEq)]
pub struct EditBoardState(pub EditBoard);

pub enum EditBoardAction {
    Apply(ItemKey, EditAction),
    Show(String),
}

impl Reducible for EditBoardState {
    type Action = EditBoardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut board = self.0.clone();
        match action {
            EditBoardAction::Apply(key, action) => board.apply(key, action),
            EditBoardAction::Show(date) => board.show_date(&date),
        }
        Rc::new(EditBoardState(board))
    }
}

#[derive(Clone, PartialEq)]
pub struct DetailState {
    /// Date currently shown in the panel
    pub selected: Option<String>,
    /// Notes of the selected date; `Pending` until its fetch lands
    pub notes: DetailNotes,
    pub edits: EditBoard,
}

pub struct UseDetailResult {
    pub state: DetailState,
    pub actions: UseDetailActions,
}

#[derive(Clone, PartialEq)]
pub struct UseDetailActions {
    /// Show (or refresh) the panel for a date
    pub show: Callback<String>,
    pub edit: Callback<(ItemKey, EditAction)>,
}

#[hook]
pub fn use_detail(api_client: &ApiClient, requests: &Rc<RefCell<ViewRequests>>) -> UseDetailResult {
    let selected = use_state(|| Option::<String>::None);
    // Notes tagged with the date they were fetched for
    let loaded = use_state(|| Option::<(String, DetailNotes)>::None);
    let edits = use_reducer(EditBoardState::default);

    let show = {
        let api_client = api_client.clone();
        let requests = requests.clone();
        let selected = selected.clone();
        let loaded = loaded.clone();
        let edits = edits.clone();

        use_callback((), move |date: String, _| {
            let api_client = api_client.clone();
            let requests = requests.clone();
            let loaded = loaded.clone();
            let ticket = requests.borrow_mut().begin_detail();

            // Drafts only survive a refresh of the date already shown
            edits.dispatch(EditBoardAction::Show(date.clone()));
            selected.set(Some(date.clone()));

            spawn_local(async move {
                let notes = workflow::load_detail_notes(&api_client, &date).await;
                if requests.borrow().is_current_detail(ticket) {
                    loaded.set(Some((date, notes)));
                } else {
                    log::debug!(target: "detail", "Discarding stale notes for {}", date);
                }
            });
        })
    };

    let edit = {
        let edits = edits.clone();
        use_callback((), move |(key, action): (ItemKey, EditAction), _| {
            edits.dispatch(EditBoardAction::Apply(key, action));
        })
    };

    let notes = match (&*selected, &*loaded) {
        (Some(date), Some((loaded_date, notes))) if date == loaded_date => notes.clone(),
        _ => DetailNotes::Pending,
    };

    UseDetailResult {
        state: DetailState {
            selected: (*selected).clone(),
            notes,
            edits: edits.0.clone(),
        },
        actions: UseDetailActions { show, edit },
    }
}
