//! In-memory backend for controller tests

use crate::api::{BookmarkApi, TagApi};
use crate::error::{FirehoseError, Result};
use crate::list::query::{BookmarkQuery, Page};
use crate::models::bookmark::{Bookmark, BookmarkPatch};
use crate::models::tag::Tag;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    List(BookmarkQuery),
    Find(String),
    Create(String),
    Update(String, BookmarkPatch),
    Delete(String),
    AllTags,
    Tagged(String),
}

/// Scripted [`BookmarkApi`] + [`TagApi`]
///
/// Each queue is consumed front to back. An empty queue answers with an
/// empty page, a fresh record or `Ok(())`; `find_bookmark` answers 404.
#[derive(Default)]
pub struct FakeApi {
    pages: RefCell<VecDeque<Result<Page>>>,
    tagged: RefCell<VecDeque<Result<Vec<Bookmark>>>>,
    tags: RefCell<VecDeque<Result<Vec<Tag>>>>,
    found: RefCell<VecDeque<Result<Bookmark>>>,
    created: RefCell<VecDeque<Result<Bookmark>>>,
    updates: RefCell<VecDeque<Result<()>>>,
    deletes: RefCell<VecDeque<Result<()>>>,
    calls: RefCell<Vec<ApiCall>>,
    next_id: Cell<u32>,
}

pub fn server_error() -> FirehoseError {
    FirehoseError::Api {
        status: 500,
        detail: None,
    }
}

pub fn bookmark(id: &str) -> Bookmark {
    Bookmark::with_title(id, &format!("https://example.com/{}", id), id)
}

pub fn page(ids: &[&str], total_pages: u32) -> Page {
    Page {
        records: ids.iter().map(|id| bookmark(id)).collect(),
        total_pages,
    }
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(self, ids: &[&str], total_pages: u32) -> Self {
        self.pages.borrow_mut().push_back(Ok(page(ids, total_pages)));
        self
    }

    pub fn with_list_error(self) -> Self {
        self.pages.borrow_mut().push_back(Err(server_error()));
        self
    }

    pub fn with_tagged(self, records: Vec<Bookmark>) -> Self {
        self.tagged.borrow_mut().push_back(Ok(records));
        self
    }

    pub fn with_tags(self, result: Result<Vec<Tag>>) -> Self {
        self.tags.borrow_mut().push_back(result);
        self
    }

    pub fn with_found(self, result: Result<Bookmark>) -> Self {
        self.found.borrow_mut().push_back(result);
        self
    }

    pub fn with_created(self, result: Result<Bookmark>) -> Self {
        self.created.borrow_mut().push_back(result);
        self
    }

    pub fn with_update(self, result: Result<()>) -> Self {
        self.updates.borrow_mut().push_back(result);
        self
    }

    pub fn with_delete(self, result: Result<()>) -> Self {
        self.deletes.borrow_mut().push_back(result);
        self
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.borrow().clone()
    }

    pub fn list_calls(&self) -> Vec<BookmarkQuery> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                ApiCall::List(query) => Some(query.clone()),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: ApiCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl BookmarkApi for FakeApi {
    fn list_bookmarks(&self, query: &BookmarkQuery) -> Result<Page> {
        self.record(ApiCall::List(query.clone()));
        self.pages
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(page(&[], 1)))
    }

    fn find_bookmark(&self, id: &str) -> Result<Bookmark> {
        self.record(ApiCall::Find(id.to_string()));
        self.found.borrow_mut().pop_front().unwrap_or_else(|| {
            Err(FirehoseError::Api {
                status: 404,
                detail: None,
            })
        })
    }

    fn create_bookmark(&self, url: &str) -> Result<Bookmark> {
        self.record(ApiCall::Create(url.to_string()));
        self.created.borrow_mut().pop_front().unwrap_or_else(|| {
            let n = self.next_id.get() + 1;
            self.next_id.set(n);
            Ok(Bookmark::with_title(format!("new-{}", n), url, url))
        })
    }

    fn update_bookmark(&self, id: &str, patch: &BookmarkPatch) -> Result<()> {
        self.record(ApiCall::Update(id.to_string(), patch.clone()));
        self.updates.borrow_mut().pop_front().unwrap_or(Ok(()))
    }

    fn delete_bookmark(&self, id: &str) -> Result<()> {
        self.record(ApiCall::Delete(id.to_string()));
        self.deletes.borrow_mut().pop_front().unwrap_or(Ok(()))
    }
}

impl TagApi for FakeApi {
    fn all_tags(&self) -> Result<Vec<Tag>> {
        self.record(ApiCall::AllTags);
        self.tags.borrow_mut().pop_front().unwrap_or(Ok(Vec::new()))
    }

    fn tagged_bookmarks(&self, name: &str) -> Result<Vec<Bookmark>> {
        self.record(ApiCall::Tagged(name.to_string()));
        self.tagged.borrow_mut().pop_front().unwrap_or(Ok(Vec::new()))
    }
}
