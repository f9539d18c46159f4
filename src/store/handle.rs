//! Scoped database handles.

use super::NotesDb;
use super::schema::{create_schema, drop_schema, schema_version, set_schema_version};
use crate::store::{StoreError, StoreResult};
use rusqlite::Connection;
use std::fs;

/// What a handle is opened for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    /// Reads only; writes through the handle fail.
    Read,
    /// Reads and writes.
    ReadWrite,
}

/// An open connection to the notes database.
///
/// The connection is closed when the handle is dropped. Call
/// [`DbHandle::close`] to observe errors raised while closing.
#[derive(Debug)]
pub struct DbHandle {
    conn: Connection,
    mode: AccessMode,
}

impl DbHandle {
    /// Returns the underlying SQLite connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Returns the mode this handle was opened with.
    pub fn mode(&self) -> AccessMode {
        self.mode
    }

    /// Closes the handle.
    pub fn close(self) -> StoreResult<()> {
        self.conn.close().map_err(|(_, err)| StoreError::Database(err))
    }
}

impl NotesDb {
    /// Opens a handle for reading.
    pub fn readable(&self) -> StoreResult<DbHandle> {
        self.open_handle(AccessMode::Read)
    }

    /// Opens a handle for reading and writing.
    pub fn writable(&self) -> StoreResult<DbHandle> {
        self.open_handle(AccessMode::ReadWrite)
    }

    fn open_handle(&self, mode: AccessMode) -> StoreResult<DbHandle> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| StoreError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut conn = Connection::open(&self.path)?;
        self.prepare_schema(&mut conn)?;

        if mode == AccessMode::Read {
            conn.pragma_update(None, "query_only", true)?;
        }

        tracing::debug!(path = %self.path.display(), ?mode, "opened notes database");
        Ok(DbHandle { conn, mode })
    }

    /// Brings the schema to the target version.
    ///
    /// Upgrades are destructive: the notes table is dropped and recreated.
    fn prepare_schema(&self, conn: &mut Connection) -> StoreResult<()> {
        let tx = conn.transaction()?;
        let found = schema_version(&tx)?;

        if found > self.version {
            return Err(StoreError::Downgrade {
                found,
                supported: self.version,
            });
        }

        if found == 0 {
            create_schema(&tx)?;
            set_schema_version(&tx, self.version)?;
            tracing::info!(path = %self.path.display(), version = self.version, "created notes table");
        } else if found < self.version {
            drop_schema(&tx)?;
            create_schema(&tx)?;
            set_schema_version(&tx, self.version)?;
            tracing::warn!(
                path = %self.path.display(),
                from = found,
                to = self.version,
                "schema upgraded, existing notes were discarded"
            );
        }

        tx.commit()?;
        Ok(())
    }
}
