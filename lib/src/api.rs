//! The operations list, tag and detail controllers need from the backend

use crate::error::Result;
use crate::http::{HttpClient, Transport};
use crate::jsonapi::{Document, Query, ResourceClient};
use crate::list::query::{BookmarkQuery, Page};
use crate::models::bookmark::{Bookmark, BookmarkPatch, BOOKMARK_TYPE};
use crate::models::tag::{Tag, TAG_TYPE};
use log::debug;
use serde_json::Value;

pub trait BookmarkApi {
    /// One page of the read or unread collection
    fn list_bookmarks(&self, query: &BookmarkQuery) -> Result<Page>;

    fn find_bookmark(&self, id: &str) -> Result<Bookmark>;

    /// Create a bookmark for `url` and return the server's record
    fn create_bookmark(&self, url: &str) -> Result<Bookmark>;

    fn update_bookmark(&self, id: &str, patch: &BookmarkPatch) -> Result<()>;

    fn delete_bookmark(&self, id: &str) -> Result<()>;
}

pub trait TagApi {
    fn all_tags(&self) -> Result<Vec<Tag>>;

    /// Bookmarks carrying the tag `name`, unsorted
    fn tagged_bookmarks(&self, name: &str) -> Result<Vec<Bookmark>>;
}

/// [`BookmarkApi`] and [`TagApi`] over the JSON:API backend
#[derive(Debug, Clone)]
pub struct RemoteApi<T = HttpClient> {
    bookmarks: ResourceClient<T>,
    tags: ResourceClient<T>,
}

impl<T: Transport + Clone> RemoteApi<T> {
    pub fn new(transport: T) -> Self {
        Self {
            bookmarks: ResourceClient::new(BOOKMARK_TYPE, transport.clone()),
            tags: ResourceClient::new(TAG_TYPE, transport),
        }
    }
}

impl<T: Transport> BookmarkApi for RemoteApi<T> {
    fn list_bookmarks(&self, query: &BookmarkQuery) -> Result<Page> {
        debug!("loading bookmarks: {:?}", query);
        let doc: Document<Vec<Bookmark>> = self.bookmarks.list(&query.to_query())?;
        Ok(Page::from_document(doc))
    }

    fn find_bookmark(&self, id: &str) -> Result<Bookmark> {
        let doc: Document<Bookmark> = self.bookmarks.find(id)?;
        Ok(doc.data)
    }

    fn create_bookmark(&self, url: &str) -> Result<Bookmark> {
        let doc: Document<Bookmark> = self.bookmarks.create(&BookmarkPatch::new_link(url))?;
        Ok(doc.data)
    }

    fn update_bookmark(&self, id: &str, patch: &BookmarkPatch) -> Result<()> {
        let _: Option<Document<Value>> = self.bookmarks.update(id, patch)?;
        Ok(())
    }

    fn delete_bookmark(&self, id: &str) -> Result<()> {
        self.bookmarks.delete(id)
    }
}

impl<T: Transport> TagApi for RemoteApi<T> {
    fn all_tags(&self) -> Result<Vec<Tag>> {
        let doc: Document<Vec<Tag>> = self.tags.all()?;
        Ok(doc.data)
    }

    fn tagged_bookmarks(&self, name: &str) -> Result<Vec<Bookmark>> {
        let query = Query::new().filter("name", name).option("include", "bookmarks");
        let doc: Document<Vec<Tag>> = self.tags.list(&query)?;
        doc.included_of(BOOKMARK_TYPE)
    }
}
