//! Validation of user input before a note is saved.

use thiserror::Error;

/// The message shown when a save is attempted with a blank field.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a title and content.";

/// Why a draft cannot be saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("title is empty")]
    EmptyTitle,

    #[error("content is empty")]
    EmptyContent,

    #[error("title and content are empty")]
    EmptyTitleAndContent,
}

impl DraftError {
    /// Returns the user-facing message for this error.
    ///
    /// All variants share one message.
    pub fn user_message(&self) -> &'static str {
        EMPTY_INPUT_MESSAGE
    }
}

/// A title/content pair that has passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft<'a> {
    title: &'a str,
    content: &'a str,
}

impl<'a> NoteDraft<'a> {
    /// Validates raw field text.
    ///
    /// Text is taken as-is: whitespace-only input counts as non-empty.
    pub fn new(title: &'a str, content: &'a str) -> Result<Self, DraftError> {
        match (title.is_empty(), content.is_empty()) {
            (false, false) => Ok(Self { title, content }),
            (true, false) => Err(DraftError::EmptyTitle),
            (false, true) => Err(DraftError::EmptyContent),
            (true, true) => Err(DraftError::EmptyTitleAndContent),
        }
    }

    pub fn title(&self) -> &'a str {
        self.title
    }

    pub fn content(&self) -> &'a str {
        self.content
    }
}
