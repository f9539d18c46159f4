//! Host-independent screen state: input fields, list adapter, controller

mod adapter;
mod controller;
mod field;

pub use adapter::{NoteRow, NotesAdapter};
pub use controller::{NotesScreen, SaveOutcome, ScreenView};
pub use field::InputField;
