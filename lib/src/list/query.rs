use crate::jsonapi::{Document, Query};
use crate::models::bookmark::Bookmark;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::fmt;

/// Parameters of one bookmark list request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkQuery {
    pub read: bool,
    /// Title substring; empty means no filter
    pub search_text: String,
    /// 1-indexed
    pub page_number: u32,
}

impl BookmarkQuery {
    pub fn new(read: bool) -> Self {
        Self {
            read,
            search_text: String::new(),
            page_number: 1,
        }
    }

    pub fn with_search(mut self, search_text: &str) -> Self {
        self.search_text = search_text.to_string();
        self
    }

    pub fn with_page(mut self, page_number: u32) -> Self {
        self.page_number = page_number.max(1);
        self
    }

    /// `filter[read]`, `filter[title]` only when searching, then `page[number]`
    pub fn to_query(&self) -> Query {
        let mut query = Query::new().filter("read", self.read);
        if !self.search_text.is_empty() {
            query = query.filter("title", &self.search_text);
        }
        query.option("page[number]", self.page_number)
    }
}

/// One fetched page, normalized
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub records: Vec<Bookmark>,
    pub total_pages: u32,
}

impl Page {
    /// A page of a list response; a missing `page-count` means one page
    pub fn from_document(doc: Document<Vec<Bookmark>>) -> Self {
        Self {
            total_pages: doc.meta.page_count.unwrap_or(1),
            records: doc.data,
        }
    }

    /// All bookmarks of a tag, most recently moved to the list first
    pub fn from_tagged(mut records: Vec<Bookmark>) -> Self {
        records.sort_by_key(|b| Reverse(b.attributes.moved_to_list_at));
        Self {
            records,
            total_pages: 1,
        }
    }
}

/// Which collection a list shows
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListSource {
    Unread,
    Read,
    Tagged(String),
}

impl ListSource {
    /// Value of `filter[read]`, if this source filters on it
    pub fn read_filter(&self) -> Option<bool> {
        match self {
            ListSource::Unread => Some(false),
            ListSource::Read => Some(true),
            ListSource::Tagged(_) => None,
        }
    }

    pub fn paginates(&self) -> bool {
        self.read_filter().is_some()
    }

    pub fn searchable(&self) -> bool {
        self.read_filter().is_some()
    }

    /// Whether the add-URL field is offered on this list
    pub fn accepts_new_links(&self) -> bool {
        matches!(self, ListSource::Unread)
    }

    /// Whether `bookmark` belongs in this collection
    pub fn admits(&self, bookmark: &Bookmark) -> bool {
        match self {
            ListSource::Unread => !bookmark.is_read(),
            ListSource::Read => bookmark.is_read(),
            ListSource::Tagged(name) => bookmark.has_tag(name),
        }
    }
}

impl fmt::Display for ListSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListSource::Unread => write!(f, "Unread"),
            ListSource::Read => write!(f, "Read"),
            ListSource::Tagged(name) => write!(f, "{}", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jsonapi::Meta;
    use chrono::{TimeZone, Utc};
    use rstest::rstest;

    #[rstest]
    #[case(BookmarkQuery::new(false), "filter[read]=false&page[number]=1")]
    #[case(BookmarkQuery::new(true).with_page(2), "filter[read]=true&page[number]=2")]
    #[case(
        BookmarkQuery::new(true).with_search("2"),
        "filter[read]=true&filter[title]=2&page[number]=1"
    )]
    #[case(BookmarkQuery::new(true).with_search(""), "filter[read]=true&page[number]=1")]
    #[case(BookmarkQuery::new(false).with_page(0), "filter[read]=false&page[number]=1")]
    fn test_to_query(#[case] query: BookmarkQuery, #[case] expected: &str) {
        assert_eq!(query.to_query().to_query_string(), expected);
    }

    #[test]
    fn test_page_from_document() {
        let doc = Document {
            data: vec![Bookmark::with_title("1", "https://a.io", "T")],
            included: Vec::new(),
            meta: Meta {
                page_count: Some(7),
            },
        };
        let page = Page::from_document(doc);
        assert_eq!(page.total_pages, 7);
        assert_eq!(page.records.len(), 1);
    }

    #[test]
    fn test_page_without_page_count() {
        let doc = Document {
            data: Vec::new(),
            included: Vec::new(),
            meta: Meta::default(),
        };
        assert_eq!(Page::from_document(doc).total_pages, 1);
    }

    #[test]
    fn test_tagged_sorted_newest_first() {
        let mut older = Bookmark::with_title("1", "https://a.io", "older");
        older.attributes.moved_to_list_at =
            Some(Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap());
        let mut newer = Bookmark::with_title("2", "https://b.io", "newer");
        newer.attributes.moved_to_list_at =
            Some(Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap());
        let undated = Bookmark::with_title("3", "https://c.io", "undated");

        let page = Page::from_tagged(vec![older, undated, newer]);
        let ids: Vec<&str> = page.records.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1", "3"]);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_source_admits() {
        let mut bookmark = Bookmark::with_title("1", "https://a.io", "T");
        bookmark.attributes.tag_list = Some("rust".to_string());
        assert!(ListSource::Unread.admits(&bookmark));
        assert!(!ListSource::Read.admits(&bookmark));
        assert!(ListSource::Tagged("rust".to_string()).admits(&bookmark));
        assert!(!ListSource::Tagged("web".to_string()).admits(&bookmark));

        bookmark.attributes.read = true;
        assert!(!ListSource::Unread.admits(&bookmark));
        assert!(ListSource::Read.admits(&bookmark));
    }

    #[test]
    fn test_source_capabilities() {
        assert!(ListSource::Unread.accepts_new_links());
        assert!(!ListSource::Read.accepts_new_links());
        assert!(ListSource::Read.paginates());
        assert!(!ListSource::Tagged("x".to_string()).paginates());
        assert!(!ListSource::Tagged("x".to_string()).searchable());
    }
}
