//! Core types: Note and the draft validation rule

mod draft;
mod note;

pub use draft::{DraftError, EMPTY_INPUT_MESSAGE, NoteDraft};
pub use note::Note;
