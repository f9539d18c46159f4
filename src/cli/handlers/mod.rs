//! Command handlers for the CLI.

mod add;
mod completions;
mod list;
mod shell;


pub use add::handle_add;
pub use completions::handle_completions;
pub use list::handle_list;
pub use shell::handle_shell;

#[cfg(test)]
pub(crate) use shell::run_shell;
