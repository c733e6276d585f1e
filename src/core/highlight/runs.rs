//! Merge sections into display runs with word spacing restored.

use serde::{Deserialize, Serialize};

use super::sections::Section;

/// A contiguous span of display text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    pub text: String,
    pub bold: bool,
}

impl Run {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
        }
    }
}

/// Push the buffered text as a run. A bold buffer is trimmed so the highlight
/// never covers padding; its leading word space moves onto the previous run.
fn flush(runs: &mut Vec<Run>, buffer: &mut String, bold: bool) {
    if buffer.is_empty() {
        return;
    }
    let text = std::mem::take(buffer);
    if !bold {
        runs.push(Run::plain(text));
        return;
    }
    if text.starts_with(' ')
        && let Some(previous) = runs.last_mut()
    {
        previous.text.push(' ');
    }
    let trimmed = text.trim();
    if !trimmed.is_empty() {
        runs.push(Run::bold(trimmed));
    }
}

/// Fold sections into runs. Adjacent sections of equal boldness share a run;
/// a space goes before each new word except the very first.
pub(crate) fn merge_sections(sections: &[Section<'_>]) -> Vec<Run> {
    let mut runs = Vec::new();
    let Some(first) = sections.first() else {
        return runs;
    };
    let mut bold = first.bold;
    let mut buffer = String::new();
    for (index, section) in sections.iter().enumerate() {
        if section.bold != bold {
            flush(&mut runs, &mut buffer, bold);
            bold = section.bold;
        }
        if !section.continuation && index > 0 {
            buffer.push(' ');
        }
        buffer.push_str(section.content);
    }
    flush(&mut runs, &mut buffer, bold);
    runs
}
