//! Optional `config.toml` that pins where the notes database lives.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::store::DATABASE_NAME;

/// Settings read from `jotter/config.toml` under the user's config directory.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Database file to use when `--db` is not given
    pub db: Option<PathBuf>,
}

impl Config {
    /// Reads the config file from its standard location.
    ///
    /// A missing file yields the empty config.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Reads the config file at `path`, or the empty config if it is absent.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        Self::parse(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// `$XDG_CONFIG_HOME/jotter/config.toml` on Linux, the platform
    /// equivalent elsewhere, `./jotter/config.toml` if neither is known.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("jotter")
            .join("config.toml")
    }

    /// The database file for this run.
    ///
    /// `--db` beats the `db` key; with neither, notes live in `notes.db`
    /// under the platform data directory (`$XDG_DATA_HOME/jotter` on Linux)
    /// so they survive across working directories.
    pub fn db_path(&self, cli_db: Option<&PathBuf>) -> PathBuf {
        match (cli_db, &self.db) {
            (Some(flag), _) => flag.clone(),
            (None, Some(configured)) => configured.clone(),
            (None, None) => Self::default_db_path(),
        }
    }

    fn default_db_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("jotter")
            .join(DATABASE_NAME)
    }
}
