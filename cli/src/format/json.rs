use crate::format::traits::BookmarkFormat;
use firehose::models::bookmark::Bookmark;
use serde::Serialize;

pub struct JsonBookmark<'a>(pub &'a Bookmark);

/// Flattened view; the JSON:API envelope isn't useful on a terminal
#[derive(Serialize)]
struct JsonRow<'a> {
    id: &'a str,
    url: &'a str,
    title: &'a str,
    domain: Option<String>,
    source: Option<&'a str>,
    comment: Option<&'a str>,
    tags: Vec<String>,
    read: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    moved_to_list_at: Option<String>,
}

impl<'a> BookmarkFormat for JsonBookmark<'a> {
    fn to_string(&self) -> String {
        let b = self.0;
        let attrs = &b.attributes;
        let row = JsonRow {
            id: &b.id,
            url: &attrs.url,
            title: b.display_title(),
            domain: b.domain(),
            source: attrs.source.as_deref(),
            comment: attrs.comment.as_deref(),
            tags: b.tags(),
            read: attrs.read,
            moved_to_list_at: attrs.moved_to_list_at.map(|t| t.to_rfc3339()),
        };
        serde_json::to_string_pretty(&row).unwrap_or_default()
    }
}
