//! SQLite-backed note storage.

mod handle;
mod notes;
pub mod schema;


use std::path::{Path, PathBuf};
use thiserror::Error;

pub use handle::{AccessMode, DbHandle};
pub use schema::{DATABASE_NAME, DATABASE_VERSION};

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// An I/O error occurred.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The database was written by a newer schema version.
    #[error("database schema version {found} is newer than supported version {supported}")]
    Downgrade { found: u32, supported: u32 },
}

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Access helper for the notes database file.
///
/// Holds no connection. Every operation opens its own handle and releases it
/// before returning.
#[derive(Debug, Clone)]
pub struct NotesDb {
    path: PathBuf,
    version: u32,
}

impl NotesDb {
    /// Targets the database at `path` with the current schema version.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_version(path, DATABASE_VERSION)
    }

    /// Targets the database at `path` with an explicit schema version.
    pub fn with_version(path: impl Into<PathBuf>, version: u32) -> Self {
        Self {
            path: path.into(),
            version,
        }
    }

    /// Returns the database file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the schema version this helper maintains.
    pub fn version(&self) -> u32 {
        self.version
    }
}
