//! The notes screen: input fields, save action and list.

use super::adapter::NotesAdapter;
use super::field::InputField;
use crate::domain::{DraftError, NoteDraft};
use crate::store::{NotesDb, StoreResult};

/// Rendering surface for the notes screen.
pub trait ScreenView {
    /// Redraws every row of the list.
    fn render_list(&mut self, adapter: &NotesAdapter);

    /// Shows a short-lived message to the user.
    fn show_message(&mut self, message: &str);
}

/// Result of a save action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The note was stored under `id` and the list refreshed.
    Saved { id: i64 },
    /// Input was incomplete; nothing was stored.
    Rejected(DraftError),
}

/// Controller for the single notes screen.
///
/// Owns the input fields and the list adapter. Storage is reached through
/// [`NotesDb`], which opens a fresh handle per operation.
pub struct NotesScreen<V: ScreenView> {
    db: NotesDb,
    title: InputField,
    content: InputField,
    adapter: NotesAdapter,
    view: V,
}

impl<V: ScreenView> NotesScreen<V> {
    /// Builds the screen and populates the list from storage.
    pub fn activate(db: NotesDb, view: V) -> StoreResult<Self> {
        let notes = db.all_notes()?;
        let mut screen = Self {
            db,
            title: InputField::new(),
            content: InputField::new(),
            adapter: NotesAdapter::new(notes),
            view,
        };
        screen.redraw_if_changed();
        Ok(screen)
    }

    pub fn title_field(&self) -> &InputField {
        &self.title
    }

    pub fn title_field_mut(&mut self) -> &mut InputField {
        &mut self.title
    }

    pub fn content_field(&self) -> &InputField {
        &self.content
    }

    pub fn content_field_mut(&mut self) -> &mut InputField {
        &mut self.content
    }

    pub fn adapter(&self) -> &NotesAdapter {
        &self.adapter
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Handles the save action.
    ///
    /// With both fields filled the note is inserted, the fields are cleared
    /// and the list is reloaded. Otherwise the validation message is shown
    /// and storage is not touched.
    pub fn save(&mut self) -> StoreResult<SaveOutcome> {
        let draft = match NoteDraft::new(self.title.text(), self.content.text()) {
            Ok(draft) => draft,
            Err(err) => {
                self.view.show_message(err.user_message());
                return Ok(SaveOutcome::Rejected(err));
            }
        };

        let id = self.db.insert_note(draft.title(), draft.content())?;
        self.title.clear();
        self.content.clear();

        self.refresh()?;
        Ok(SaveOutcome::Saved { id })
    }

    /// Reloads every note into the list.
    pub fn refresh(&mut self) -> StoreResult<()> {
        let notes = self.db.all_notes()?;
        self.adapter.update_notes(notes);
        self.redraw_if_changed();
        Ok(())
    }

    fn redraw_if_changed(&mut self) {
        if self.adapter.take_changed() {
            self.view.render_list(&self.adapter);
        }
    }
}
