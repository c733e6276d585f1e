//! Write styled runs as a single string.

use crossterm::style::{Stylize, style};

use crate::core::highlight::{self, Run};

use super::RunStyle;

fn render_run(run: &Run, style_kind: RunStyle) -> String {
    if !run.bold {
        return run.text.clone();
    }
    match style_kind {
        RunStyle::Ansi => style(run.text.as_str()).bold().to_string(),
        RunStyle::Markdown => format!("**{}**", run.text),
        RunStyle::Plain => run.text.clone(),
    }
}

/// Concatenate runs, marking bold runs according to `style_kind`.
pub(crate) fn render_runs(runs: &[Run], style_kind: RunStyle) -> String {
    if style_kind == RunStyle::Plain {
        return highlight::runs_text(runs);
    }
    runs.iter().map(|r| render_run(r, style_kind)).collect()
}
