//! Binds the in-memory note list to rendered rows.

use crate::domain::Note;

/// The content shown in one list row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteRow<'a> {
    pub title: &'a str,
    pub content: &'a str,
}

/// Backing sequence for the notes list.
///
/// Updates replace the whole sequence and flag it as changed; the view then
/// redraws every row.
#[derive(Debug, Default)]
pub struct NotesAdapter {
    notes: Vec<Note>,
    changed: bool,
}

impl NotesAdapter {
    pub fn new(notes: Vec<Note>) -> Self {
        Self {
            notes,
            changed: true,
        }
    }

    /// Returns the number of rows.
    pub fn item_count(&self) -> usize {
        self.notes.len()
    }

    /// Returns the row content at `position`, or `None` past the end.
    pub fn bind(&self, position: usize) -> Option<NoteRow<'_>> {
        self.notes.get(position).map(|note| NoteRow {
            title: note.title(),
            content: note.content(),
        })
    }

    /// Iterates rows in display order.
    pub fn rows(&self) -> impl Iterator<Item = NoteRow<'_>> {
        (0..self.item_count()).filter_map(|position| self.bind(position))
    }

    /// Returns the notes currently held.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Swaps in a new sequence and signals that all rows changed.
    pub fn update_notes(&mut self, notes: Vec<Note>) {
        self.notes = notes;
        self.changed = true;
    }

    /// Returns whether the data changed since the last call, and resets the flag.
    pub fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }
}
