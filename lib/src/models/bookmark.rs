use crate::jsonapi::Resource;
use crate::tags::tag_list_to_tags;
use crate::utils::domain_for_url;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// JSON:API type name of bookmark resources
pub const BOOKMARK_TYPE: &str = "bookmarks";

/// A saved link, as served by the backend
pub type Bookmark = Resource<BookmarkAttributes>;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct BookmarkAttributes {
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Where the link was found, usually another URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Space-delimited tag names
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_list: Option<String>,
    #[serde(default)]
    pub read: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moved_to_list_at: Option<DateTime<Utc>>,
}

impl Resource<BookmarkAttributes> {
    /// A bookmark with only a URL and a title, unread
    pub fn with_title(id: impl Into<String>, url: &str, title: &str) -> Self {
        Resource::new(
            id,
            BOOKMARK_TYPE,
            BookmarkAttributes {
                url: url.to_string(),
                title: Some(title.to_string()),
                ..BookmarkAttributes::default()
            },
        )
    }

    /// Title for display, falling back to the URL
    pub fn display_title(&self) -> &str {
        self.attributes
            .title
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(&self.attributes.url)
    }

    pub fn tags(&self) -> Vec<String> {
        tag_list_to_tags(self.attributes.tag_list.as_deref().unwrap_or(""))
    }

    pub fn has_tag(&self, name: &str) -> bool {
        self.tags().iter().any(|t| t == name)
    }

    pub fn domain(&self) -> Option<String> {
        domain_for_url(&self.attributes.url)
    }

    pub fn is_read(&self) -> bool {
        self.attributes.read
    }

    /// Apply the fields present in `patch` to the local copy
    pub fn apply(&mut self, patch: &BookmarkPatch) {
        let attrs = &mut self.attributes;
        if let Some(url) = &patch.url {
            attrs.url = url.clone();
        }
        if let Some(title) = &patch.title {
            attrs.title = Some(title.clone());
        }
        if let Some(comment) = &patch.comment {
            attrs.comment = Some(comment.clone());
        }
        if let Some(source) = &patch.source {
            attrs.source = Some(source.clone());
        }
        if let Some(tag_list) = &patch.tag_list {
            attrs.tag_list = Some(tag_list.clone());
        }
        if let Some(read) = patch.read {
            attrs.read = read;
        }
    }
}

/// Partial attribute set sent with `PATCH`/`POST`; absent fields are omitted
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct BookmarkPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_list: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read: Option<bool>,
}

impl BookmarkPatch {
    /// Only the `read` flag
    pub fn read(read: bool) -> Self {
        Self {
            read: Some(read),
            ..Self::default()
        }
    }

    /// Attributes of a new bookmark
    pub fn new_link(url: &str) -> Self {
        Self {
            url: Some(url.to_string()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
