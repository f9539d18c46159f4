//! Interactive notes screen on the terminal.

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::cli::view::TerminalView;
use crate::screen::{NotesScreen, SaveOutcome};
use crate::store::NotesDb;

/// Title input that ends the session.
const QUIT: &str = "/quit";

type TerminalScreen<O, E> = NotesScreen<TerminalView<O, E>>;

pub fn handle_shell(db_path: &Path) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_shell(
        NotesDb::new(db_path),
        stdin.lock(),
        stdout.lock(),
        io::stderr(),
    )
}

/// Runs the screen loop until end of input or `/quit`.
///
/// Each iteration reads a title and a content line, then triggers the save
/// action. A partial entry cut off by end of input is discarded.
pub(crate) fn run_shell<R, O, E>(db: NotesDb, mut input: R, out: O, err: E) -> Result<()>
where
    R: BufRead,
    O: Write,
    E: Write,
{
    let path = db.path().to_path_buf();
    let mut screen = NotesScreen::activate(db, TerminalView::new(out, err))
        .with_context(|| format!("failed to open database at {}", path.display()))?;
    check_view(&mut screen)?;

    loop {
        let Some(title) = prompt(&mut screen, &mut input, "Title: ")? else {
            break;
        };
        if title == QUIT {
            break;
        }
        let Some(content) = prompt(&mut screen, &mut input, "Content: ")? else {
            break;
        };

        screen.title_field_mut().set_text(title);
        screen.content_field_mut().set_text(content);

        match screen.save().context("failed to save note")? {
            SaveOutcome::Saved { id } => tracing::info!(id, "saved note"),
            SaveOutcome::Rejected(reason) => tracing::debug!(%reason, "save rejected"),
        }
        check_view(&mut screen)?;
    }

    Ok(())
}

fn prompt<R: BufRead, O: Write, E: Write>(
    screen: &mut TerminalScreen<O, E>,
    input: &mut R,
    label: &str,
) -> Result<Option<String>> {
    let out = screen.view_mut().out_mut();
    write!(out, "{label}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}

fn check_view<O: Write, E: Write>(screen: &mut TerminalScreen<O, E>) -> Result<()> {
    match screen.view_mut().take_error() {
        Some(e) => Err(e).context("failed to write to terminal"),
        None => Ok(()),
    }
}
