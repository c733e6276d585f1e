//! Section extraction: split highlight snippets into plain and `<hi>` marked pieces.

const OPEN_TAG: &str = "<hi>";
const CLOSE_TAG: &str = "</hi>";

/// Separator placed between two highlight snippets.
pub(crate) const SNIPPET_SEPARATOR: &str = "...";

/// A piece of a highlight snippet, in source order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Section<'a> {
    pub content: &'a str,
    pub bold: bool,
    /// Glued to the previous section with no space (both come from one token).
    pub continuation: bool,
}

impl<'a> Section<'a> {
    fn new(content: &'a str, bold: bool, continuation: bool) -> Self {
        Self {
            content,
            bold,
            continuation,
        }
    }
}

/// Find the next `<hi>...</hi>` span in `token`.
/// Returns (text before, highlighted text, rest) only when a closing tag follows the opening one.
fn next_span(token: &str) -> Option<(&str, &str, &str)> {
    let start = token.find(OPEN_TAG)?;
    let inner_start = start + OPEN_TAG.len();
    let inner_len = token[inner_start..].find(CLOSE_TAG)?;
    let inner_end = inner_start + inner_len;
    Some((
        &token[..start],
        &token[inner_start..inner_end],
        &token[inner_end + CLOSE_TAG.len()..],
    ))
}

/// Split one whitespace-free token into sections. Empty pieces are dropped.
fn push_token_sections<'a>(token: &'a str, out: &mut Vec<Section<'a>>) {
    let mut rest = token;
    let mut continuation = false;
    while let Some((before, highlight, after)) = next_span(rest) {
        for (content, bold) in [(before, false), (highlight, true)] {
            if !content.is_empty() {
                out.push(Section::new(content, bold, continuation));
                continuation = true;
            }
        }
        rest = after;
    }
    if rest.contains(OPEN_TAG) {
        log::warn!("Unmatched <hi> in highlight token, keeping it as text: {}", rest);
    }
    if !rest.is_empty() {
        out.push(Section::new(rest, false, continuation));
    }
}

/// Sections of a single snippet, in order.
fn snippet_sections(snippet: &str) -> Vec<Section<'_>> {
    let mut sections = Vec::new();
    for token in snippet.split_whitespace() {
        push_token_sections(token, &mut sections);
    }
    sections
}

/// Build the section list for all snippets. Blank snippets yield nothing, not even a
/// separator. Any other snippet is followed by a separator unless it is the last entry.
pub(crate) fn build_sections<S: AsRef<str>>(match_highlights: &[S]) -> Vec<Section<'_>> {
    let last = match_highlights.len().saturating_sub(1);
    let mut sections = Vec::new();
    for (index, snippet) in match_highlights.iter().enumerate() {
        let parts = snippet_sections(snippet.as_ref());
        if parts.is_empty() {
            continue;
        }
        sections.extend(parts);
        if index != last {
            sections.push(Section::new(SNIPPET_SEPARATOR, false, false));
        }
    }
    sections
}
