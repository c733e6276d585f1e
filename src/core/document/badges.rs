//! Metadata badges shown under a search result title.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::SearchDocument;

/// Default maximum `key + value` length of a displayed metadata tag.
pub const DEFAULT_MAX_TAG_LENGTH: usize = 40;

const DAYS_BEFORE_ABSOLUTE_DATE: i64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MetadataBadge {
    UpdatedAt { updated_at: DateTime<Utc> },
    Tag { key: String, value: String },
    /// Shown when the document has neither an update time nor metadata.
    Placeholder,
}

impl MetadataBadge {
    /// Badge label relative to `now`.
    pub fn label(&self, now: DateTime<Utc>) -> String {
        match self {
            MetadataBadge::UpdatedAt { updated_at } => {
                format!("Updated {}", time_ago(*updated_at, now))
            }
            MetadataBadge::Tag { key, value } => format!("{}={}", key, value),
            MetadataBadge::Placeholder => "No metadata".to_string(),
        }
    }
}

/// Length of a tag as a browser counts it, in UTF-16 code units.
fn tag_length(key: &str, value: &str) -> usize {
    key.encode_utf16().count() + value.encode_utf16().count()
}

/// Badges for a document: update time, then tags short enough to display.
pub fn metadata_badges(doc: &SearchDocument, max_tag_length: usize) -> Vec<MetadataBadge> {
    let mut badges = Vec::new();
    if let Some(updated_at) = doc.updated_at {
        badges.push(MetadataBadge::UpdatedAt { updated_at });
    }
    badges.extend(
        doc.metadata
            .iter()
            .filter(|(key, value)| tag_length(key, value) <= max_tag_length)
            .map(|(key, value)| MetadataBadge::Tag {
                key: key.clone(),
                value: value.clone(),
            }),
    );
    if doc.updated_at.is_none() && doc.metadata.is_empty() {
        badges.push(MetadataBadge::Placeholder);
    }
    badges
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", n, unit)
    }
}

/// Human relative time: "just now", "5 minutes ago", ... then an absolute date after 30 days.
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    if elapsed.num_days() >= DAYS_BEFORE_ABSOLUTE_DATE {
        return then.format("%b %-d, %Y").to_string();
    }
    if elapsed.num_minutes() < 1 {
        return "just now".to_string();
    }
    if elapsed.num_hours() < 1 {
        return plural(elapsed.num_minutes(), "minute");
    }
    if elapsed.num_days() < 1 {
        return plural(elapsed.num_hours(), "hour");
    }
    plural(elapsed.num_days(), "day")
}
