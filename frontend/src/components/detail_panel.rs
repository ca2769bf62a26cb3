use calendar_domain::date_utils::format_timestamp_for_display;
use calendar_domain::detail::DetailContent;
use calendar_domain::{DetailView, Draft, EditAction, EditBoard, InlineEdit, ItemKey, Mutation};
use shared::{Event as CalendarEvent, Note};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::hooks::use_mutations::MutationRequest;

#[derive(Properties, PartialEq)]
pub struct DetailPanelProps {
    pub view: DetailView,
    pub edits: EditBoard,
    pub on_edit: Callback<(ItemKey, EditAction)>,
    pub run: Callback<MutationRequest>,
    /// Load an event into the entry form for editing there
    pub on_load_into_form: Callback<CalendarEvent>,
}

/// Settle an inline edit once the server answered its save
fn settle(on_edit: &Callback<(ItemKey, EditAction)>, key: ItemKey) -> Callback<bool> {
    let on_edit = on_edit.clone();
    Callback::from(move |succeeded: bool| {
        let action = if succeeded {
            EditAction::SaveSucceeded
        } else {
            EditAction::SaveFailed
        };
        on_edit.emit((key, action));
    })
}

#[function_component(DetailPanel)]
pub fn detail_panel(props: &DetailPanelProps) -> Html {
    let view = &props.view;

    let heading = html! {
        <div class={classes!("event-details-date", view.is_today.then_some("today-highlight"))}>
            {&view.heading}
            {if view.is_today {
                html! { <>{" "}<span class="today-badge">{"TODAY"}</span></> }
            } else {
                html! {}
            }}
        </div>
    };

    let body = match &view.content {
        DetailContent::Loading => html! {
            <p class="text-muted">{"Loading..."}</p>
        },
        DetailContent::Empty | DetailContent::LoadFailed => html! {
            <p class="text-muted">{view.placeholder().unwrap_or_default()}</p>
        },
        DetailContent::Items { events, notes } => html! {
            <>
                {if !events.is_empty() {
                    html! {
                        <div class="events-section">
                            <h6><i class="fas fa-calendar-check"></i>{" Events"}</h6>
                            {for events.iter().map(|event| event_item(props, event))}
                        </div>
                    }
                } else {
                    html! {}
                }}
                {if !notes.is_empty() {
                    html! {
                        <div class="notes-section">
                            <h6><i class="fas fa-sticky-note"></i>{" Notes"}</h6>
                            {for notes.iter().map(|note| note_item(props, note))}
                        </div>
                    }
                } else {
                    html! {}
                }}
            </>
        },
    };

    html! {
        <div
            id="event-details-display"
            class={classes!("event-details-display", view.has_content().then_some("has-content"))}
        >
            {heading}
            {body}
        </div>
    }
}

fn event_item(props: &DetailPanelProps, event: &CalendarEvent) -> Html {
    let key = ItemKey::Event(event.id);
    let date = props.view.date_key.clone();

    match props.edits.state(key) {
        InlineEdit::Editing {
            draft: Draft::Event { title, description },
        } => {
            let on_title = {
                let on_edit = props.on_edit.clone();
                let description = description.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    let draft = Draft::Event {
                        title: input.value(),
                        description: description.clone(),
                    };
                    on_edit.emit((key, EditAction::Change(draft)));
                })
            };
            let on_description = {
                let on_edit = props.on_edit.clone();
                let title = title.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                    let draft = Draft::Event {
                        title: title.clone(),
                        description: input.value(),
                    };
                    on_edit.emit((key, EditAction::Change(draft)));
                })
            };
            let on_save = {
                let run = props.run.clone();
                let settled = settle(&props.on_edit, key);
                let id = event.id;
                let request = event.edited(title, description);
                Callback::from(move |_: MouseEvent| {
                    let mutation = Mutation::UpdateEvent {
                        id,
                        request: request.clone(),
                    };
                    run.emit(MutationRequest::new(mutation).on_settled(settled.clone()));
                })
            };

            html! {
                <div class="event-item mb-2 p-2 border rounded" data-event-id={event.id.to_string()}>
                    <div class="event-title">
                        <input type="text" class="form-control form-control-sm" value={title.clone()} oninput={on_title} />
                    </div>
                    <div class="event-description">
                        <textarea class="form-control form-control-sm" rows="2" value={description.clone()} oninput={on_description} />
                    </div>
                    <div class="event-actions mt-2">
                        <button class="btn btn-sm btn-success me-1" onclick={on_save}>
                            <i class="fas fa-save"></i>{" Save"}
                        </button>
                        {cancel_button(&props.on_edit, key)}
                    </div>
                </div>
            }
        }
        _ => {
            let on_begin = {
                let on_edit = props.on_edit.clone();
                let draft = Draft::from_event(event);
                Callback::from(move |_: MouseEvent| on_edit.emit((key, EditAction::Begin(draft.clone()))))
            };
            let on_load = {
                let on_load_into_form = props.on_load_into_form.clone();
                let event = event.clone();
                Callback::from(move |_: MouseEvent| on_load_into_form.emit(event.clone()))
            };
            let on_delete = {
                let run = props.run.clone();
                let id = event.id;
                Callback::from(move |_: MouseEvent| {
                    run.emit(Mutation::DeleteEvent { id, date: date.clone() }.into());
                })
            };
            let description = if event.description.is_empty() {
                "No description".to_string()
            } else {
                event.description.clone()
            };

            html! {
                <div class="event-item mb-2 p-2 border rounded" data-event-id={event.id.to_string()}>
                    <div class="event-title">{&event.title}</div>
                    <div class="event-description">{description}</div>
                    <small class="text-muted">{format!("Category: {}", event.category)}</small><br />
                    <div class="event-actions mt-2">
                        <button class="btn btn-sm btn-primary me-1" onclick={on_begin}>
                            <i class="fas fa-edit"></i>{" Edit"}
                        </button>
                        <button class="btn btn-sm btn-outline-primary me-1" onclick={on_load} title="Edit in form">
                            <i class="fas fa-pen-to-square"></i>{" Form"}
                        </button>
                        <button class="btn btn-sm btn-danger" onclick={on_delete}>
                            <i class="fas fa-trash"></i>{" Delete"}
                        </button>
                    </div>
                </div>
            }
        }
    }
}

fn note_item(props: &DetailPanelProps, note: &Note) -> Html {
    let key = ItemKey::Note(note.id);
    let date = props.view.date_key.clone();
    let created = html! {
        <small class="text-muted">{format!("Created: {}", format_timestamp_for_display(&note.created_at))}</small>
    };

    match props.edits.state(key) {
        InlineEdit::Editing {
            draft: Draft::Note { content },
        } => {
            let on_change = {
                let on_edit = props.on_edit.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                    let draft = Draft::Note {
                        content: input.value(),
                    };
                    on_edit.emit((key, EditAction::Change(draft)));
                })
            };
            let on_save = {
                let run = props.run.clone();
                let settled = settle(&props.on_edit, key);
                let id = note.id;
                let content = content.clone();
                Callback::from(move |_: MouseEvent| {
                    let mutation = Mutation::UpdateNote {
                        id,
                        date: date.clone(),
                        content: content.clone(),
                    };
                    run.emit(MutationRequest::new(mutation).on_settled(settled.clone()));
                })
            };

            html! {
                <div class="note-item mb-2 p-2 border rounded">
                    <div class="note-content">
                        <textarea class="form-control" rows="3" value={content.clone()} oninput={on_change} />
                    </div>
                    {created}<br />
                    <div class="note-actions mt-2">
                        <button class="btn btn-sm btn-success me-1" onclick={on_save}>
                            <i class="fas fa-save"></i>{" Save"}
                        </button>
                        {cancel_button(&props.on_edit, key)}
                    </div>
                </div>
            }
        }
        _ => {
            let on_begin = {
                let on_edit = props.on_edit.clone();
                let draft = Draft::from_note(note);
                Callback::from(move |_: MouseEvent| on_edit.emit((key, EditAction::Begin(draft.clone()))))
            };
            let on_delete = {
                let run = props.run.clone();
                let id = note.id;
                Callback::from(move |_: MouseEvent| {
                    run.emit(Mutation::DeleteNote { id, date: date.clone() }.into());
                })
            };

            html! {
                <div class="note-item mb-2 p-2 border rounded">
                    <div class="note-content">{&note.content}</div>
                    {created}<br />
                    <div class="note-actions mt-2">
                        <button class="btn btn-sm btn-primary me-1" onclick={on_begin}>
                            <i class="fas fa-edit"></i>{" Edit"}
                        </button>
                        <button class="btn btn-sm btn-danger" onclick={on_delete}>
                            <i class="fas fa-trash"></i>{" Delete"}
                        </button>
                    </div>
                </div>
            }
        }
    }
}

fn cancel_button(on_edit: &Callback<(ItemKey, EditAction)>, key: ItemKey) -> Html {
    let onclick = {
        let on_edit = on_edit.clone();
        Callback::from(move |_: MouseEvent| on_edit.emit((key, EditAction::Cancel)))
    };
    html! {
        <button class="btn btn-sm btn-secondary" {onclick}>
            <i class="fas fa-times"></i>{" Cancel"}
        </button>
    }
}
