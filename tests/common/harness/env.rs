//! Isolated test environment with temp directory.

use super::JotterCommand;
use jotter::store::{DATABASE_NAME, NotesDb};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary database location.
///
/// The directory doubles as the config home so a user's real config file
/// never leaks into a test run.
pub struct TestEnv {
    _temp_dir: TempDir,
    root: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the path of the database used by commands from [`TestEnv::cmd`].
    pub fn db_path(&self) -> PathBuf {
        self.root.join("data").join(DATABASE_NAME)
    }

    /// Returns a store helper for the environment's database.
    pub fn db(&self) -> NotesDb {
        NotesDb::new(self.db_path())
    }

    /// Inserts a note directly, bypassing the CLI.
    pub fn add_note(&self, title: &str, content: &str) -> i64 {
        self.db()
            .insert_note(title, content)
            .expect("Failed to insert test note")
    }

    /// Creates a JotterCommand configured for this test environment.
    pub fn cmd(&self) -> JotterCommand {
        JotterCommand::new()
            .config_home(&self.root)
            .db(&self.db_path())
    }

    /// Creates a JotterCommand without `--db`, relying on the config file.
    pub fn cmd_without_db(&self) -> JotterCommand {
        JotterCommand::new().config_home(&self.root)
    }

    /// Writes `config.toml` where jotter looks for it.
    pub fn write_config(&self, contents: &str) {
        let dir = self.root.join("jotter");
        std::fs::create_dir_all(&dir).expect("Failed to create config dir");
        std::fs::write(dir.join("config.toml"), contents).expect("Failed to write config");
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
