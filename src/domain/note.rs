//! The Note entity.

use serde::Serialize;

/// A saved note.
///
/// Notes are created by the store and never change afterwards; the
/// identifier is assigned by SQLite when the row is inserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    id: i64,
    title: String,
    content: String,
}

impl Note {
    /// Creates a note from its stored parts.
    pub fn new(id: i64, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
        }
    }

    /// Returns the row identifier.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Returns the note's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the note's content.
    pub fn content(&self) -> &str {
        &self.content
    }
}
