use std::collections::BTreeMap;

use chrono::{Duration, TimeZone, Utc};

use crate::core::highlight::Run;

use super::{
    CommentMap, DisplayContext, DisplayMode, DocumentView, MetadataBadge, Relevance, RelevanceMap,
    SearchDocument, metadata_badges, time_ago,
};

fn doc(id: &str) -> SearchDocument {
    SearchDocument {
        document_id: id.to_string(),
        ..Default::default()
    }
}

#[test]
fn display_title_prefers_semantic_identifier() {
    let mut d = doc("doc-1");
    assert_eq!(d.display_title(), "doc-1");
    d.semantic_identifier = Some(String::new());
    assert_eq!(d.display_title(), "doc-1");
    d.semantic_identifier = Some("Onboarding guide".to_string());
    assert_eq!(d.display_title(), "Onboarding guide");
}

#[test]
fn summary_runs_falls_back_to_blurb() {
    let mut d = doc("doc-1");
    d.blurb = "plain blurb".to_string();
    assert_eq!(d.summary_runs(), [Run::plain("plain blurb")]);

    d.match_highlights = vec!["a <hi>hit</hi>".to_string()];
    assert_eq!(d.summary_runs(), [Run::plain("a "), Run::bold("hit")]);
}

#[test]
fn badges_placeholder_when_nothing_to_show() {
    let badges = metadata_badges(&doc("d"), 40);
    assert_eq!(badges, [MetadataBadge::Placeholder]);
}

#[test]
fn badges_tag_length_counts_utf16_units() {
    let mut d = doc("d");
    // Each emoji is one char but two UTF-16 units.
    d.metadata = BTreeMap::from([
        ("k".to_string(), "\u{1F600}".repeat(19)),
        ("é".to_string(), "ü".repeat(37)),
    ]);
    let badges = metadata_badges(&d, 38);
    assert_eq!(
        badges,
        [MetadataBadge::Tag {
            key: "é".to_string(),
            value: "ü".repeat(37)
        }]
    );
}

#[test]
fn badges_filter_long_tags() {
    let mut d = doc("d");
    d.metadata = BTreeMap::from([
        ("team".to_string(), "search".to_string()),
        ("path".to_string(), "x".repeat(40)),
    ]);
    let badges = metadata_badges(&d, 40);
    assert_eq!(
        badges,
        [MetadataBadge::Tag {
            key: "team".to_string(),
            value: "search".to_string()
        }]
    );
}

#[test]
fn badges_no_placeholder_when_all_tags_filtered() {
    let mut d = doc("d");
    d.metadata = BTreeMap::from([("k".to_string(), "v".repeat(50))]);
    assert!(metadata_badges(&d, 40).is_empty());
}

#[test]
fn badges_updated_at_comes_first() {
    let updated_at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let mut d = doc("d");
    d.updated_at = Some(updated_at);
    d.metadata = BTreeMap::from([("b".to_string(), "2".to_string())]);
    let badges = metadata_badges(&d, 40);
    assert_eq!(badges.len(), 2);
    assert_eq!(badges[0], MetadataBadge::UpdatedAt { updated_at });
}

#[test]
fn time_ago_ranges() {
    let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
    assert_eq!(time_ago(now - Duration::seconds(20), now), "just now");
    assert_eq!(time_ago(now - Duration::minutes(1), now), "1 minute ago");
    assert_eq!(time_ago(now - Duration::minutes(5), now), "5 minutes ago");
    assert_eq!(time_ago(now - Duration::hours(3), now), "3 hours ago");
    assert_eq!(time_ago(now - Duration::days(1), now), "1 day ago");
    assert_eq!(time_ago(now - Duration::days(45), now), "May 1, 2024");
}

#[test]
fn badge_labels() {
    let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
    let tag = MetadataBadge::Tag {
        key: "team".to_string(),
        value: "search".to_string(),
    };
    assert_eq!(tag.label(now), "team=search");
    let updated = MetadataBadge::UpdatedAt {
        updated_at: now - Duration::hours(2),
    };
    assert_eq!(updated.label(now), "Updated 2 hours ago");
}

#[test]
fn relevance_lookup() {
    let map = RelevanceMap::from([("a".to_string(), true), ("b".to_string(), false)]);
    assert_eq!(Relevance::lookup(None, "a"), Relevance::Pending);
    assert_eq!(Relevance::lookup(Some(&map), "a"), Relevance::Relevant);
    assert_eq!(Relevance::lookup(Some(&map), "b"), Relevance::NotRelevant);
    assert_eq!(Relevance::lookup(Some(&map), "missing"), Relevance::NotRelevant);
}

#[test]
fn view_shows_comment_only_in_agentic_mode() {
    let comments = CommentMap::from([("d".to_string(), "Explains the setup".to_string())]);
    let d = doc("d");

    let standard = DisplayContext {
        comments: Some(&comments),
        ..Default::default()
    };
    assert_eq!(DocumentView::build(&d, &standard).comment, None);

    let agentic = DisplayContext {
        mode: DisplayMode::Agentic,
        comments: Some(&comments),
        ..Default::default()
    };
    assert_eq!(
        DocumentView::build(&d, &agentic).comment.as_deref(),
        Some("Explains the setup")
    );
}

#[test]
fn view_collects_document_fields() {
    let relevance = RelevanceMap::from([("d".to_string(), true)]);
    let mut d = doc("d");
    d.semantic_identifier = Some("Title".to_string());
    d.link = Some(String::new());
    d.source_type = "confluence".to_string();
    d.match_highlights = vec!["<hi>x</hi>".to_string()];
    let ctx = DisplayContext {
        relevance: Some(&relevance),
        ..Default::default()
    };
    let view = DocumentView::build(&d, &ctx);
    assert_eq!(view.title, "Title");
    assert_eq!(view.link, None);
    assert_eq!(view.source_type, "confluence");
    assert_eq!(view.relevance, Relevance::Relevant);
    assert_eq!(view.badges, [MetadataBadge::Placeholder]);
    assert_eq!(view.summary, [Run::bold("x")]);
}

#[test]
fn document_deserializes_with_defaults() {
    let d: SearchDocument = serde_json::from_str(
        r#"{"document_id": "d1", "updated_at": "2024-05-01T12:00:00Z", "metadata": {"a": "b"}}"#,
    )
    .expect("valid document");
    assert_eq!(d.document_id, "d1");
    assert!(d.match_highlights.is_empty());
    assert_eq!(
        d.updated_at,
        Some(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap())
    );
}
