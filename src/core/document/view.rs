//! Display view of a search result: everything a renderer needs, already resolved.

use std::collections::HashMap;

use serde::Serialize;

use crate::core::highlight::Run;

use super::{MetadataBadge, SearchDocument, metadata_badges};

/// Relevance verdicts keyed by document id.
pub type RelevanceMap = HashMap<String, bool>;
/// Agent comments keyed by document id.
pub type CommentMap = HashMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Relevance {
    Relevant,
    NotRelevant,
    /// Relevance has not been computed yet.
    Pending,
}

impl Relevance {
    pub fn lookup(relevance: Option<&RelevanceMap>, document_id: &str) -> Self {
        match relevance {
            None => Relevance::Pending,
            Some(map) if map.get(document_id).copied().unwrap_or(false) => Relevance::Relevant,
            Some(_) => Relevance::NotRelevant,
        }
    }

    pub fn marker(self) -> &'static str {
        match self {
            Relevance::Relevant => "✓",
            Relevance::NotRelevant => "✗",
            Relevance::Pending => "…",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayMode {
    #[default]
    Standard,
    /// Agent-assisted search: shows the agent's comment next to each result.
    Agentic,
}

/// Inputs shared by all documents of one result list.
#[derive(Debug, Clone)]
pub struct DisplayContext<'a> {
    pub mode: DisplayMode,
    pub relevance: Option<&'a RelevanceMap>,
    pub comments: Option<&'a CommentMap>,
    pub max_tag_length: usize,
}

impl Default for DisplayContext<'_> {
    fn default() -> Self {
        Self {
            mode: DisplayMode::Standard,
            relevance: None,
            comments: None,
            max_tag_length: super::DEFAULT_MAX_TAG_LENGTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentView {
    pub document_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub source_type: String,
    pub badges: Vec<MetadataBadge>,
    pub relevance: Relevance,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub summary: Vec<Run>,
}

impl DocumentView {
    pub fn build(doc: &SearchDocument, ctx: &DisplayContext<'_>) -> Self {
        let comment = match ctx.mode {
            DisplayMode::Standard => None,
            DisplayMode::Agentic => ctx
                .comments
                .and_then(|comments| comments.get(&doc.document_id))
                .cloned(),
        };
        Self {
            document_id: doc.document_id.clone(),
            title: doc.display_title().to_string(),
            link: doc.link.clone().filter(|l| !l.is_empty()),
            source_type: doc.source_type.clone(),
            badges: metadata_badges(doc, ctx.max_tag_length),
            relevance: Relevance::lookup(ctx.relevance, &doc.document_id),
            comment,
            summary: doc.summary_runs(),
        }
    }
}
