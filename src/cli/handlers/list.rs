//! List command handler.

use anyhow::{Context, Result};
use std::io;
use std::path::Path;

use crate::cli::ListArgs;
use crate::cli::output::{Output, OutputFormat, write_note_table};
use crate::store::NotesDb;

pub fn handle_list(args: &ListArgs, db_path: &Path) -> Result<()> {
    let db = NotesDb::new(db_path);
    let notes = db
        .all_notes()
        .with_context(|| format!("failed to read notes from {}", db_path.display()))?;

    match args.format {
        OutputFormat::Human => write_note_table(&mut io::stdout().lock(), &notes)?,
        OutputFormat::Json => {
            let output = Output::new(&notes);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
