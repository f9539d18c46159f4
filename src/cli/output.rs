//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;
use std::io::{self, Write};

use crate::domain::Note;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

/// Writes notes as an aligned table with a trailing count.
pub(crate) fn write_note_table<W: Write>(out: &mut W, notes: &[Note]) -> io::Result<()> {
    if notes.is_empty() {
        return writeln!(out, "No notes found.");
    }

    writeln!(out, "{:<6}  {:<30}  {}", "ID", "Title", "Content")?;
    writeln!(out, "{:<6}  {:<30}  {}", "------", "-".repeat(30), "-".repeat(40))?;
    for note in notes {
        writeln!(
            out,
            "{:<6}  {:<30}  {}",
            note.id(),
            truncate_str(note.title(), 30),
            truncate_str(&single_line(note.content()), 40)
        )?;
    }
    writeln!(out)?;
    writeln!(out, "{} note(s)", notes.len())
}

/// Collapses line breaks so content fits one table row.
pub(crate) fn single_line(s: &str) -> String {
    s.lines().collect::<Vec<_>>().join(" ")
}
