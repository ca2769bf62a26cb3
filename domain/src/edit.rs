//! Inline editing of events and notes inside the detail panel.
//!
//! Every item is either being viewed or being edited. Transitions are driven
//! by [`EditAction`]s; a save only leaves `Editing` once the server confirmed
//! it.

use std::collections::BTreeMap;

use shared::{Event, Note};

/// Identifies an item in the detail panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ItemKey {
    Event(i64),
    Note(i64),
}

/// Field values while an item is being edited
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Draft {
    Event { title: String, description: String },
    Note { content: String },
}

impl Draft {
    pub fn from_event(event: &Event) -> Self {
        Draft::Event {
            title: event.title.clone(),
            description: event.description.clone(),
        }
    }

    pub fn from_note(note: &Note) -> Self {
        Draft::Note {
            content: note.content.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditAction {
    /// Edit clicked: show inputs seeded with the current values
    Begin(Draft),
    /// An input changed
    Change(Draft),
    /// Cancel clicked: drop the draft, no request
    Cancel,
    /// The server accepted the save
    SaveSucceeded,
    /// The server rejected the save or it never arrived
    SaveFailed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InlineEdit {
    #[default]
    Viewing,
    Editing { draft: Draft },
}

impl InlineEdit {
    pub fn transition(self, action: EditAction) -> Self {
        match (self, action) {
            (InlineEdit::Viewing, EditAction::Begin(draft)) => InlineEdit::Editing { draft },
            (InlineEdit::Editing { .. }, EditAction::Change(draft)) => InlineEdit::Editing { draft },
            (InlineEdit::Editing { .. }, EditAction::Cancel | EditAction::SaveSucceeded) => {
                InlineEdit::Viewing
            }
            // A failed save keeps the user's input on screen
            (editing @ InlineEdit::Editing { .. }, EditAction::SaveFailed) => editing,
            (state, _) => state,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, InlineEdit::Editing { .. })
    }

    pub fn draft(&self) -> Option<&Draft> {
        match self {
            InlineEdit::Editing { draft } => Some(draft),
            InlineEdit::Viewing => None,
        }
    }
}

/// Edit state for every item of the detail panel; absent items are viewing.
///
/// The board belongs to the date the panel shows. Pending edits survive
/// refreshes of that date and are dropped when the panel moves elsewhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBoard {
    date: Option<String>,
    items: BTreeMap<ItemKey, InlineEdit>,
}

impl EditBoard {
    pub fn state(&self, key: ItemKey) -> &InlineEdit {
        static VIEWING: InlineEdit = InlineEdit::Viewing;
        self.items.get(&key).unwrap_or(&VIEWING)
    }

    pub fn apply(&mut self, key: ItemKey, action: EditAction) {
        let next = self.state(key).clone().transition(action);
        match next {
            InlineEdit::Viewing => {
                self.items.remove(&key);
            }
            editing => {
                self.items.insert(key, editing);
            }
        }
    }

    /// Current draft of an item being edited
    pub fn draft(&self, key: ItemKey) -> Option<&Draft> {
        self.state(key).draft()
    }

    /// Point the board at the date being shown
    pub fn show_date(&mut self, date: &str) {
        if self.date.as_deref() != Some(date) {
            self.items.clear();
            self.date = Some(date.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note_draft(content: &str) -> Draft {
        Draft::Note {
            content: content.to_string(),
        }
    }

    #[test]
    fn test_edit_then_cancel_returns_to_viewing() {
        let state = InlineEdit::Viewing
            .transition(EditAction::Begin(note_draft("original")))
            .transition(EditAction::Change(note_draft("changed")));
        assert_eq!(state.draft(), Some(&note_draft("changed")));

        let state = state.transition(EditAction::Cancel);
        assert_eq!(state, InlineEdit::Viewing);
    }

    #[test]
    fn test_failed_save_stays_editing() {
        let state = InlineEdit::Viewing
            .transition(EditAction::Begin(note_draft("original")))
            .transition(EditAction::Change(note_draft("typed")))
            .transition(EditAction::SaveFailed);
        assert!(state.is_editing());
        assert_eq!(state.draft(), Some(&note_draft("typed")));
    }

    #[test]
    fn test_successful_save_returns_to_viewing() {
        let state = InlineEdit::Viewing
            .transition(EditAction::Begin(note_draft("original")))
            .transition(EditAction::SaveSucceeded);
        assert_eq!(state, InlineEdit::Viewing);
    }

    #[test]
    fn test_viewing_ignores_stray_actions() {
        for action in [
            EditAction::Change(note_draft("x")),
            EditAction::Cancel,
            EditAction::SaveSucceeded,
            EditAction::SaveFailed,
        ] {
            assert_eq!(InlineEdit::Viewing.transition(action), InlineEdit::Viewing);
        }
    }

    #[test]
    fn test_board_tracks_items_independently() {
        let mut board = EditBoard::default();
        let event = ItemKey::Event(1);
        let note = ItemKey::Note(1);

        board.apply(
            event,
            EditAction::Begin(Draft::Event {
                title: "Standup".to_string(),
                description: String::new(),
            }),
        );
        board.apply(note, EditAction::Begin(note_draft("hello")));
        assert!(board.state(event).is_editing());
        assert!(board.state(note).is_editing());

        board.apply(note, EditAction::Cancel);
        assert!(!board.state(note).is_editing());
        assert!(board.state(event).is_editing());
    }

    #[test]
    fn test_refreshing_same_date_keeps_other_drafts() {
        let mut board = EditBoard::default();
        board.show_date("2024-03-05");

        let saved = ItemKey::Note(1);
        let other = ItemKey::Note(2);
        board.apply(saved, EditAction::Begin(note_draft("first")));
        board.apply(other, EditAction::Begin(note_draft("second")));
        board.apply(other, EditAction::Change(note_draft("second, half typed")));

        // Saving one note refreshes the panel for the same date
        board.apply(saved, EditAction::SaveSucceeded);
        board.show_date("2024-03-05");

        assert!(!board.state(saved).is_editing());
        assert_eq!(board.draft(other), Some(&note_draft("second, half typed")));
    }

    #[test]
    fn test_switching_date_drops_drafts() {
        let mut board = EditBoard::default();
        board.show_date("2024-03-05");
        board.apply(ItemKey::Event(1), EditAction::Begin(note_draft("x")));

        board.show_date("2024-03-06");
        assert!(board.draft(ItemKey::Event(1)).is_none());
    }

    #[test]
    fn test_drafts_from_items() {
        let note = Note {
            id: 3,
            content: "text".to_string(),
            created_at: "2024-03-05T08:00:00".to_string(),
            updated_at: None,
        };
        assert_eq!(Draft::from_note(&note), note_draft("text"));
    }
}
