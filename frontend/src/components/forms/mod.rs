pub mod event_form;
pub mod note_form;

pub use event_form::EventForm;
pub use note_form::NoteForm;
