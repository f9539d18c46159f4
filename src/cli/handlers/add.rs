//! Add command handler.

use anyhow::{Context, Result, bail};
use std::io;
use std::path::Path;

use crate::cli::AddArgs;
use crate::cli::view::TerminalView;
use crate::screen::{NotesScreen, SaveOutcome};
use crate::store::NotesDb;

pub fn handle_add(args: &AddArgs, db_path: &Path) -> Result<()> {
    let db = NotesDb::new(db_path);
    let view = TerminalView::messages_only(io::stdout(), io::stderr());
    let mut screen = NotesScreen::activate(db, view)
        .with_context(|| format!("failed to open database at {}", db_path.display()))?;

    screen.title_field_mut().set_text(args.title.as_str());
    screen.content_field_mut().set_text(args.content.as_str());

    match screen.save().context("failed to save note")? {
        SaveOutcome::Saved { id } => {
            tracing::info!(id, "saved note");
            println!("Saved: {} [{}]", args.title, id);
            Ok(())
        }
        SaveOutcome::Rejected(reason) => {
            tracing::debug!(%reason, "save rejected");
            bail!("note not saved");
        }
    }
}
