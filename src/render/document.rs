//! Multi-line text blocks for document views and assistant lists.

use chrono::{DateTime, Utc};

use crate::core::assistants::Assistant;
use crate::core::document::DocumentView;

use super::{RunStyle, render_runs};

const INDENT: &str = "   ";

/// One result block: marker and title, link, badges, optional comment, summary.
pub(crate) fn render_document(view: &DocumentView, style: RunStyle, now: DateTime<Utc>) -> String {
    let mut lines = Vec::new();
    let mut title = format!("{} {}", view.relevance.marker(), view.title);
    if !view.source_type.is_empty() {
        title.push_str(&format!(" [{}]", view.source_type));
    }
    lines.push(title);
    if let Some(link) = &view.link {
        lines.push(format!("{}{}", INDENT, link));
    }
    if !view.badges.is_empty() {
        let labels: Vec<String> = view.badges.iter().map(|b| b.label(now)).collect();
        lines.push(format!("{}{}", INDENT, labels.join(" · ")));
    }
    if let Some(comment) = &view.comment {
        lines.push(format!("{}> {}", INDENT, comment));
    }
    let summary = render_runs(&view.summary, style);
    if !summary.is_empty() {
        lines.push(format!("{}{}", INDENT, summary));
    }
    lines.join("\n")
}

/// Tab-separated `id  name` lines, in list order.
pub(crate) fn render_assistants(assistants: &[&Assistant]) -> String {
    assistants
        .iter()
        .map(|a| format!("{}\t{}", a.id, a.name))
        .collect::<Vec<_>>()
        .join("\n")
}
