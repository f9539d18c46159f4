//! Terminal rendering of the notes screen.

use std::io::{self, Write};

use super::output::{single_line, truncate_str};
use crate::screen::{NotesAdapter, ScreenView};

/// Draws the notes screen onto a pair of writers.
///
/// The list goes to `out`, transient messages to `err`. Write failures are
/// kept and reported through [`TerminalView::take_error`] since the view
/// callbacks cannot fail.
pub struct TerminalView<O: Write, E: Write> {
    out: O,
    err: E,
    show_list: bool,
    error: Option<io::Error>,
}

impl<O: Write, E: Write> TerminalView<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self {
            out,
            err,
            show_list: true,
            error: None,
        }
    }

    /// A view that only shows messages and never draws the list.
    pub fn messages_only(out: O, err: E) -> Self {
        Self {
            show_list: false,
            ..Self::new(out, err)
        }
    }

    pub fn out_mut(&mut self) -> &mut O {
        &mut self.out
    }

    /// Returns the first write error seen, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }

    fn record(&mut self, result: io::Result<()>) {
        if let Err(e) = result
            && self.error.is_none()
        {
            self.error = Some(e);
        }
    }
}

fn draw_rows<W: Write>(out: &mut W, adapter: &NotesAdapter) -> io::Result<()> {
    writeln!(out)?;
    if adapter.item_count() == 0 {
        writeln!(out, "  (no notes yet)")?;
    }
    for (position, row) in adapter.rows().enumerate() {
        writeln!(
            out,
            "{:>4}. {:<30}  {}",
            position + 1,
            truncate_str(row.title, 30),
            truncate_str(&single_line(row.content), 40)
        )?;
    }
    writeln!(out)?;
    out.flush()
}

impl<O: Write, E: Write> ScreenView for TerminalView<O, E> {
    fn render_list(&mut self, adapter: &NotesAdapter) {
        if !self.show_list {
            return;
        }
        let result = draw_rows(&mut self.out, adapter);
        self.record(result);
    }

    fn show_message(&mut self, message: &str) {
        let result = writeln!(self.err, "{message}");
        self.record(result);
    }
}
