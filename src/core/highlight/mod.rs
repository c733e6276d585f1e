//! Search highlight rendering: turn `<hi>` marked snippets into bold/plain runs.

mod runs;
mod sections;

pub use runs::Run;

/// Build display runs from the search engine's highlight snippets.
///
/// Falls back to `fallback` as a single plain run when no snippet yields any text
/// (and to no runs at all when `fallback` is empty too).
pub fn segment<S: AsRef<str>>(match_highlights: &[S], fallback: &str) -> Vec<Run> {
    let sections = sections::build_sections(match_highlights);
    if sections.is_empty() {
        log::debug!(
            "No highlight sections from {} snippet(s), using fallback",
            match_highlights.len()
        );
        if fallback.is_empty() {
            return Vec::new();
        }
        return vec![Run::plain(fallback)];
    }
    let runs = runs::merge_sections(&sections);
    log::debug!("{} section(s) merged into {} run(s)", sections.len(), runs.len());
    runs
}

/// Concatenated text of all runs, without styling.
pub fn runs_text(runs: &[Run]) -> String {
    runs.iter().map(|r| r.text.as_str()).collect()
}
