//! Text rendering of runs, document views, and assistant lists for the terminal.

mod document;
mod runs;

pub(crate) use document::{render_assistants, render_document};
pub(crate) use runs::render_runs;

/// How styled runs are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStyle {
    /// Bold via terminal escape codes
    Ansi,
    /// Bold wrapped in `**`
    Markdown,
    /// Text only
    Plain,
}
