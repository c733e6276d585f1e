//! Search result documents and their display view.

mod badges;
mod view;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::highlight::{self, Run};

pub use badges::{DEFAULT_MAX_TAG_LENGTH, MetadataBadge, metadata_badges, time_ago};
pub use view::{CommentMap, DisplayContext, DisplayMode, DocumentView, Relevance, RelevanceMap};

/// A search result as returned by the search backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchDocument {
    pub document_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantic_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default)]
    pub source_type: String,
    #[serde(default)]
    pub blurb: String,
    #[serde(default)]
    pub match_highlights: Vec<String>,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl SearchDocument {
    /// Title to display: the semantic identifier, or the raw id when it is missing.
    pub fn display_title(&self) -> &str {
        self.semantic_identifier
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.document_id)
    }

    /// Highlighted summary; the blurb is used when there are no highlights.
    pub fn summary_runs(&self) -> Vec<Run> {
        highlight::segment(&self.match_highlights, &self.blurb)
    }
}

#[cfg(test)]
mod tests;
