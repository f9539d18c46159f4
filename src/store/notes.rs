//! Insert and query operations on the notes table.

use super::NotesDb;
use super::schema::{COLUMN_CONTENT, COLUMN_ID, COLUMN_TITLE, TABLE_NAME};
use crate::domain::Note;
use crate::store::StoreResult;
use rusqlite::params;

impl NotesDb {
    /// Appends a note and returns its assigned identifier.
    ///
    /// The caller is responsible for validating the title and content.
    pub fn insert_note(&self, title: &str, content: &str) -> StoreResult<i64> {
        let handle = self.writable()?;
        handle.conn().execute(
            &format!("INSERT INTO {TABLE_NAME} ({COLUMN_TITLE}, {COLUMN_CONTENT}) VALUES (?1, ?2)"),
            params![title, content],
        )?;
        let id = handle.conn().last_insert_rowid();
        handle.close()?;

        tracing::debug!(id, "inserted note");
        Ok(id)
    }

    /// Returns every stored note in the order SQLite yields them.
    pub fn all_notes(&self) -> StoreResult<Vec<Note>> {
        let handle = self.readable()?;
        let notes = {
            let mut stmt = handle.conn().prepare(&format!(
                "SELECT {COLUMN_ID}, {COLUMN_TITLE}, {COLUMN_CONTENT} FROM {TABLE_NAME}"
            ))?;
            let rows = stmt.query_map([], |row| {
                let id: i64 = row.get(0)?;
                let title: Option<String> = row.get(1)?;
                let content: Option<String> = row.get(2)?;
                Ok(Note::new(
                    id,
                    title.unwrap_or_default(),
                    content.unwrap_or_default(),
                ))
            })?;
            rows.collect::<Result<Vec<_>, _>>()?
        };
        handle.close()?;
        Ok(notes)
    }

    /// Returns the number of stored notes.
    pub fn count_notes(&self) -> StoreResult<usize> {
        let handle = self.readable()?;
        let count: i64 = handle.conn().query_row(
            &format!("SELECT COUNT(*) FROM {TABLE_NAME}"),
            [],
            |row| row.get(0),
        )?;
        handle.close()?;
        Ok(count as usize)
    }
}
