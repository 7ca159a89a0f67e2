//! State transitions of one bookmark list
//!
//! Every change to what a list shows goes through a method here, so the
//! controller only decides *when* to call the backend and never touches the
//! collection directly.
//!
//! Loads are two-phase: [`ListState::begin_load`] hands out a ticket and
//! [`ListState::finish_load`] only applies the result carrying the newest
//! ticket. Older responses are dropped no matter when they arrive.

use super::collection::BookmarkCollection;
use super::pagination::Pagination;
use super::query::{BookmarkQuery, ListSource, Page};
use crate::api::{BookmarkApi, TagApi};
use crate::error::Result;
use crate::models::bookmark::{Bookmark, BookmarkPatch};
use crate::models::errors::ListError;
use log::{debug, warn};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingIndicator {
    /// Spinner inside the list (pull-to-refresh)
    List,
    /// Spinner in place of the list (initial load, reload button)
    Standalone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStatus {
    Uninitialized,
    Loading,
    Ready,
    Error,
}

/// Identifies one started load; later tickets compare greater
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LoadTicket(u64);

/// What a load fetches, captured when it starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadTarget {
    Bookmarks(BookmarkQuery),
    Tagged(String),
}

/// A started load, ready to run against an API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub ticket: LoadTicket,
    pub target: LoadTarget,
}

impl LoadTarget {
    /// The request a list of `source` makes for one search and page
    pub fn new(source: &ListSource, search_text: &str, page_number: u32) -> Self {
        match source {
            ListSource::Tagged(name) => LoadTarget::Tagged(name.clone()),
            ListSource::Unread | ListSource::Read => LoadTarget::Bookmarks(
                BookmarkQuery::new(*source == ListSource::Read)
                    .with_search(search_text)
                    .with_page(page_number),
            ),
        }
    }

    pub fn fetch<A: BookmarkApi + TagApi + ?Sized>(&self, api: &A) -> Result<Page> {
        match self {
            LoadTarget::Bookmarks(query) => api.list_bookmarks(query),
            LoadTarget::Tagged(name) => api.tagged_bookmarks(name).map(Page::from_tagged),
        }
    }
}

impl LoadRequest {
    /// Issue the request; may run on another thread than the one owning the list
    pub fn execute<A: BookmarkApi + TagApi + ?Sized>(&self, api: &A) -> LoadResponse {
        LoadResponse {
            ticket: self.ticket,
            result: self.target.fetch(api),
        }
    }
}

#[derive(Debug)]
pub struct LoadResponse {
    pub ticket: LoadTicket,
    pub result: Result<Page>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Records replaced; `page_clamped` when the page count shrank below the current page
    Applied { page_clamped: bool },
    Failed,
    /// A newer load was started after this one
    Stale,
    /// The list went away while the request was in flight
    Unmounted,
}

/// Per-record actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    MarkRead,
    MarkUnread,
    Delete,
}

impl Mutation {
    pub fn error(self) -> ListError {
        match self {
            Mutation::MarkRead => ListError::MarkRead,
            Mutation::MarkUnread => ListError::MarkUnread,
            Mutation::Delete => ListError::Delete,
        }
    }

    /// Attributes sent for update-type mutations; `None` for delete
    pub fn patch(self) -> Option<BookmarkPatch> {
        match self {
            Mutation::MarkRead => Some(BookmarkPatch::read(true)),
            Mutation::MarkUnread => Some(BookmarkPatch::read(false)),
            Mutation::Delete => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Applied,
    /// Nothing was sent: empty input, unknown or busy record, declined confirmation
    Skipped,
    Failed(ListError),
}

#[derive(Debug, Clone)]
pub struct ListState {
    source: ListSource,
    records: BookmarkCollection,
    status: ListStatus,
    has_loaded: bool,
    indicator: Option<LoadingIndicator>,
    load_error: Option<ListError>,
    action_error: Option<ListError>,
    pagination: Pagination,
    search_text: String,
    input: String,
    is_creating: bool,
    busy: HashSet<String>,
    latest_ticket: u64,
    // id -> newest ticket issued when it was removed locally
    removed: HashMap<String, u64>,
    // records created locally, oldest first, with the newest ticket at creation
    created: Vec<(u64, Bookmark)>,
    mounted: bool,
}

impl ListState {
    pub fn new(source: ListSource) -> Self {
        Self {
            source,
            records: BookmarkCollection::new(),
            status: ListStatus::Uninitialized,
            has_loaded: false,
            indicator: None,
            load_error: None,
            action_error: None,
            pagination: Pagination::default(),
            search_text: String::new(),
            input: String::new(),
            is_creating: false,
            busy: HashSet::new(),
            latest_ticket: 0,
            removed: HashMap::new(),
            created: Vec::new(),
            mounted: true,
        }
    }

    pub fn source(&self) -> &ListSource {
        &self.source
    }

    pub fn records(&self) -> &BookmarkCollection {
        &self.records
    }

    pub fn status(&self) -> ListStatus {
        self.status
    }

    pub fn has_loaded(&self) -> bool {
        self.has_loaded
    }

    pub fn indicator(&self) -> Option<LoadingIndicator> {
        self.indicator
    }

    /// Message to show above the list, the latest action's failure first
    pub fn error(&self) -> Option<ListError> {
        self.action_error.or(self.load_error)
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Contents of the add-URL field
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_creating(&self) -> bool {
        self.is_creating
    }

    pub fn is_busy(&self, id: &str) -> bool {
        self.busy.contains(id)
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// "No links." once a load succeeded with nothing to show
    pub fn shows_empty_message(&self) -> bool {
        self.has_loaded && self.records.is_empty() && self.error().is_none()
    }

    /// Parameters the next load would use, for read/unread lists
    pub fn query(&self) -> Option<BookmarkQuery> {
        self.source.read_filter().map(|read| {
            BookmarkQuery::new(read)
                .with_search(&self.search_text)
                .with_page(self.pagination.page_number())
        })
    }

    fn target(&self) -> LoadTarget {
        LoadTarget::new(
            &self.source,
            &self.search_text,
            self.pagination.page_number(),
        )
    }

    /// Start a load with the current filter, search and page
    ///
    /// Records already shown stay visible while it runs. The first load
    /// always uses the standalone indicator.
    pub fn begin_load(&mut self, indicator: Option<LoadingIndicator>) -> LoadRequest {
        self.latest_ticket += 1;
        self.status = ListStatus::Loading;
        self.indicator = if self.has_loaded {
            indicator
        } else {
            Some(LoadingIndicator::Standalone)
        };
        self.load_error = None;

        let request = LoadRequest {
            ticket: LoadTicket(self.latest_ticket),
            target: self.target(),
        };
        debug!("{} list: started load {:?}", self.source, request);
        request
    }

    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: std::result::Result<Page, ListError>,
    ) -> LoadOutcome {
        if !self.mounted {
            debug!("{} list: dropping load {:?} after unmount", self.source, ticket);
            return LoadOutcome::Unmounted;
        }
        if ticket.0 != self.latest_ticket {
            warn!(
                "{} list: discarding stale load {:?} (latest is {})",
                self.source, ticket, self.latest_ticket
            );
            return LoadOutcome::Stale;
        }

        self.indicator = None;
        match result {
            Ok(page) => {
                let removed = &self.removed;
                let mut records = BookmarkCollection::from_records(page.records);
                // the request predates these local removals
                records.remove_where(|id| removed.get(id).is_some_and(|at| *at >= ticket.0));
                self.removed.retain(|_, at| *at >= ticket.0);

                // and these local inserts
                self.created.retain(|(at, _)| *at >= ticket.0);
                for (_, bookmark) in &self.created {
                    if !records.contains(&bookmark.id) && self.source.admits(bookmark) {
                        records.prepend(bookmark.clone());
                    }
                }

                self.records = records;
                self.has_loaded = true;
                self.status = ListStatus::Ready;
                let page_clamped =
                    self.source.paginates() && self.pagination.set_page_count(page.total_pages);
                LoadOutcome::Applied { page_clamped }
            }
            Err(err) => {
                self.load_error = Some(err);
                self.status = ListStatus::Error;
                LoadOutcome::Failed
            }
        }
    }

    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    /// Claim the add field for `url`; `false` when empty or a create is in flight
    pub fn begin_create(&mut self, url: &str) -> bool {
        if !self.mounted || url.is_empty() || self.is_creating {
            return false;
        }
        self.input = url.to_string();
        self.is_creating = true;
        self.action_error = None;
        true
    }

    /// Prepend the created record if it belongs here and clear the field;
    /// on failure the typed URL stays in the field
    pub fn finish_create(
        &mut self,
        result: std::result::Result<Bookmark, ListError>,
    ) -> ActionOutcome {
        self.is_creating = false;
        if !self.mounted {
            return ActionOutcome::Skipped;
        }

        match result {
            Ok(bookmark) => {
                self.removed.remove(&bookmark.id);
                if self.source.admits(&bookmark) {
                    self.created.push((self.latest_ticket, bookmark.clone()));
                    self.records.prepend(bookmark);
                }
                self.input.clear();
                ActionOutcome::Applied
            }
            Err(err) => {
                self.action_error = Some(err);
                ActionOutcome::Failed(err)
            }
        }
    }

    /// Mark `id` busy; `false` if it isn't shown or already has an action running
    pub fn begin_mutation(&mut self, id: &str, mutation: Mutation) -> bool {
        if !self.mounted || !self.records.contains(id) || self.busy.contains(id) {
            return false;
        }
        debug!("{} list: {:?} {}", self.source, mutation, id);
        self.busy.insert(id.to_string());
        self.action_error = None;
        true
    }

    /// Apply a finished mutation locally
    ///
    /// Deleted records, and records that no longer match this list's filter,
    /// are removed at once. Failures leave the record as it was.
    pub fn finish_mutation(
        &mut self,
        id: &str,
        mutation: Mutation,
        result: std::result::Result<(), ListError>,
    ) -> ActionOutcome {
        self.busy.remove(id);
        if !self.mounted {
            return ActionOutcome::Skipped;
        }

        if let Err(err) = result {
            self.action_error = Some(err);
            return ActionOutcome::Failed(err);
        }

        let patch = mutation.patch();
        let keep = match (&patch, self.records.get_mut(id)) {
            (Some(patch), Some(record)) => {
                record.apply(patch);
                self.source.admits(record)
            }
            _ => false,
        };
        if keep {
            if let (Some(patch), Some((_, created))) =
                (&patch, self.created.iter_mut().find(|(_, b)| b.id == id))
            {
                created.apply(patch);
            }
        } else {
            self.records.remove(id);
            self.removed.insert(id.to_string(), self.latest_ticket);
            self.created.retain(|(_, b)| b.id != id);
        }
        ActionOutcome::Applied
    }

    /// New search text; always starts again from page 1
    pub fn set_search(&mut self, text: &str) -> bool {
        if !self.source.searchable() {
            return false;
        }
        self.search_text = text.to_string();
        self.pagination.reset();
        true
    }

    pub fn increment_page(&mut self) -> bool {
        self.source.paginates() && self.pagination.increment()
    }

    pub fn decrement_page(&mut self) -> bool {
        self.source.paginates() && self.pagination.decrement()
    }

    /// Results arriving after this are ignored
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.indicator = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bookmark(id: &str) -> Bookmark {
        Bookmark::with_title(id, &format!("https://example.com/{}", id), id)
    }

    fn page(ids: &[&str], total_pages: u32) -> Page {
        Page {
            records: ids.iter().map(|id| bookmark(id)).collect(),
            total_pages,
        }
    }

    fn loaded(source: ListSource, ids: &[&str], total_pages: u32) -> ListState {
        let mut state = ListState::new(source);
        let request = state.begin_load(None);
        state.finish_load(request.ticket, Ok(page(ids, total_pages)));
        state
    }

    #[test]
    fn test_initial_load_uses_standalone_indicator() {
        let mut state = ListState::new(ListSource::Unread);
        assert_eq!(state.status(), ListStatus::Uninitialized);

        state.begin_load(Some(LoadingIndicator::List));
        assert_eq!(state.status(), ListStatus::Loading);
        assert_eq!(state.indicator(), Some(LoadingIndicator::Standalone));
    }

    #[test]
    fn test_later_loads_use_requested_indicator() {
        let mut state = loaded(ListSource::Unread, &["1"], 1);
        state.begin_load(Some(LoadingIndicator::List));
        assert_eq!(state.indicator(), Some(LoadingIndicator::List));
        state.begin_load(None);
        assert_eq!(state.indicator(), None);
    }

    #[test]
    fn test_load_request_captures_parameters() {
        let mut state = ListState::new(ListSource::Read);
        state.set_search("rust");
        let request = state.begin_load(None);
        assert_eq!(
            request.target,
            LoadTarget::Bookmarks(BookmarkQuery::new(true).with_search("rust"))
        );

        let mut tagged = ListState::new(ListSource::Tagged("web".to_string()));
        assert_eq!(
            tagged.begin_load(None).target,
            LoadTarget::Tagged("web".to_string())
        );
    }

    #[test]
    fn test_stale_load_is_discarded() {
        let mut state = ListState::new(ListSource::Unread);
        let first = state.begin_load(None);
        let second = state.begin_load(None);

        assert_eq!(
            state.finish_load(second.ticket, Ok(page(&["new"], 1))),
            LoadOutcome::Applied {
                page_clamped: false
            }
        );
        assert_eq!(
            state.finish_load(first.ticket, Ok(page(&["old"], 1))),
            LoadOutcome::Stale
        );
        assert_eq!(state.records().ids(), vec!["new"]);
    }

    #[test]
    fn test_stale_failure_does_not_surface() {
        let mut state = ListState::new(ListSource::Unread);
        let first = state.begin_load(None);
        let second = state.begin_load(None);
        state.finish_load(second.ticket, Ok(page(&["1"], 1)));
        state.finish_load(first.ticket, Err(ListError::Load));
        assert_eq!(state.error(), None);
        assert_eq!(state.status(), ListStatus::Ready);
    }

    #[test]
    fn test_failed_refresh_keeps_records() {
        let mut state = loaded(ListSource::Unread, &["1", "2"], 1);
        let request = state.begin_load(Some(LoadingIndicator::Standalone));
        assert_eq!(state.records().len(), 2);

        assert_eq!(
            state.finish_load(request.ticket, Err(ListError::Load)),
            LoadOutcome::Failed
        );
        assert_eq!(state.status(), ListStatus::Error);
        assert_eq!(state.error(), Some(ListError::Load));
        assert_eq!(state.records().ids(), vec!["1", "2"]);
        assert_eq!(state.indicator(), None);
    }

    #[test]
    fn test_load_error_cleared_on_next_load() {
        let mut state = ListState::new(ListSource::Unread);
        let request = state.begin_load(None);
        state.finish_load(request.ticket, Err(ListError::Load));
        state.begin_load(None);
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_unmounted_results_ignored() {
        let mut state = ListState::new(ListSource::Unread);
        let request = state.begin_load(None);
        state.unmount();
        assert_eq!(
            state.finish_load(request.ticket, Ok(page(&["1"], 1))),
            LoadOutcome::Unmounted
        );
        assert!(state.records().is_empty());
        assert!(!state.begin_create("https://x.io"));
    }

    #[test]
    fn test_removal_survives_overlapping_load() {
        let mut state = loaded(ListSource::Unread, &["1", "2"], 1);
        let in_flight = state.begin_load(None);

        assert!(state.begin_mutation("1", Mutation::MarkRead));
        state.finish_mutation("1", Mutation::MarkRead, Ok(()));

        // server answered before it saw the update
        state.finish_load(in_flight.ticket, Ok(page(&["1", "2"], 1)));
        assert_eq!(state.records().ids(), vec!["2"]);

        // a load started afterwards is authoritative again
        let next = state.begin_load(None);
        state.finish_load(next.ticket, Ok(page(&["1", "2"], 1)));
        assert_eq!(state.records().ids(), vec!["1", "2"]);
    }

    #[test]
    fn test_created_record_survives_overlapping_load() {
        let mut state = loaded(ListSource::Unread, &["1"], 1);
        let in_flight = state.begin_load(None);

        assert!(state.begin_create("https://new.io"));
        state.finish_create(Ok(bookmark("9")));
        assert_eq!(state.records().ids(), vec!["9", "1"]);

        // server answered before it saw the new link
        state.finish_load(in_flight.ticket, Ok(page(&["1"], 1)));
        assert_eq!(state.records().ids(), vec!["9", "1"]);

        // a later load is authoritative
        let next = state.begin_load(None);
        state.finish_load(next.ticket, Ok(page(&["1"], 1)));
        assert_eq!(state.records().ids(), vec!["1"]);
    }

    #[test]
    fn test_created_record_not_duplicated_by_overlapping_load() {
        let mut state = loaded(ListSource::Unread, &["1"], 1);
        let in_flight = state.begin_load(None);
        state.begin_create("https://new.io");
        state.finish_create(Ok(bookmark("9")));

        state.finish_load(in_flight.ticket, Ok(page(&["9", "1"], 1)));
        assert_eq!(state.records().ids(), vec!["9", "1"]);
    }

    #[test]
    fn test_created_then_removed_stays_removed() {
        let mut state = loaded(ListSource::Unread, &["1"], 1);
        let in_flight = state.begin_load(None);
        state.begin_create("https://new.io");
        state.finish_create(Ok(bookmark("9")));
        assert!(state.begin_mutation("9", Mutation::MarkRead));
        state.finish_mutation("9", Mutation::MarkRead, Ok(()));

        state.finish_load(in_flight.ticket, Ok(page(&["1"], 1)));
        assert_eq!(state.records().ids(), vec!["1"]);
    }

    #[test]
    fn test_mark_read_removes_from_unread() {
        let mut state = loaded(ListSource::Unread, &["1", "2"], 1);
        assert!(state.begin_mutation("1", Mutation::MarkRead));
        assert!(state.is_busy("1"));
        assert_eq!(
            state.finish_mutation("1", Mutation::MarkRead, Ok(())),
            ActionOutcome::Applied
        );
        assert!(!state.records().contains("1"));
        assert!(!state.is_busy("1"));
    }

    #[test]
    fn test_mark_read_keeps_record_in_tag_list() {
        let mut first = bookmark("1");
        first.attributes.tag_list = Some("rust".to_string());
        let mut state = ListState::new(ListSource::Tagged("rust".to_string()));
        let request = state.begin_load(None);
        state.finish_load(
            request.ticket,
            Ok(Page {
                records: vec![first],
                total_pages: 1,
            }),
        );

        state.begin_mutation("1", Mutation::MarkRead);
        state.finish_mutation("1", Mutation::MarkRead, Ok(()));
        assert!(state.records().get("1").unwrap().is_read());
    }

    #[test]
    fn test_failed_mutation_leaves_record() {
        let mut state = loaded(ListSource::Unread, &["1"], 1);
        state.begin_mutation("1", Mutation::Delete);
        assert_eq!(
            state.finish_mutation("1", Mutation::Delete, Err(ListError::Delete)),
            ActionOutcome::Failed(ListError::Delete)
        );
        assert!(state.records().contains("1"));
        assert_eq!(state.error(), Some(ListError::Delete));

        // cleared when the next attempt starts
        state.begin_mutation("1", Mutation::Delete);
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_busy_record_rejects_second_mutation() {
        let mut state = loaded(ListSource::Unread, &["1"], 1);
        assert!(state.begin_mutation("1", Mutation::MarkRead));
        assert!(!state.begin_mutation("1", Mutation::Delete));
        assert!(!state.begin_mutation("missing", Mutation::Delete));
    }

    #[test]
    fn test_create_rejects_empty_and_concurrent() {
        let mut state = loaded(ListSource::Unread, &[], 1);
        assert!(!state.begin_create(""));
        assert!(state.begin_create("https://a.io"));
        assert!(state.is_creating());
        assert!(!state.begin_create("https://b.io"));
    }

    #[test]
    fn test_create_success_prepends_and_clears_input() {
        let mut state = loaded(ListSource::Unread, &["1"], 1);
        state.set_input("https://new.io");
        state.begin_create("https://new.io");
        assert_eq!(
            state.finish_create(Ok(bookmark("9"))),
            ActionOutcome::Applied
        );
        assert_eq!(state.records().ids(), vec!["9", "1"]);
        assert_eq!(state.input(), "");
        assert!(!state.is_creating());
    }

    #[test]
    fn test_create_failure_keeps_input() {
        let mut state = loaded(ListSource::Unread, &["1"], 1);
        state.begin_create("https://new.io");
        state.finish_create(Err(ListError::Create));
        assert_eq!(state.input(), "https://new.io");
        assert_eq!(state.error(), Some(ListError::Create));
        assert_eq!(state.records().ids(), vec!["1"]);
    }

    #[test]
    fn test_created_record_outside_filter_not_shown() {
        let mut state = loaded(ListSource::Read, &["1"], 1);
        state.begin_create("https://new.io");
        state.finish_create(Ok(bookmark("9")));
        assert_eq!(state.records().ids(), vec!["1"]);
        assert_eq!(state.input(), "");
    }

    #[test]
    fn test_search_resets_page() {
        let mut state = loaded(ListSource::Read, &["1"], 7);
        assert!(state.increment_page());
        assert!(state.increment_page());
        assert_eq!(state.pagination().page_number(), 3);

        assert!(state.set_search("2"));
        assert_eq!(state.pagination().page_number(), 1);
        assert_eq!(state.search_text(), "2");
    }

    #[test]
    fn test_tagged_list_neither_searches_nor_paginates() {
        let mut state = loaded(ListSource::Tagged("rust".to_string()), &["1"], 1);
        assert!(!state.set_search("x"));
        assert!(!state.increment_page());
        assert_eq!(state.pagination().max_page_number(), None);
        assert_eq!(state.query(), None);
    }

    #[test]
    fn test_empty_message() {
        let state = loaded(ListSource::Unread, &[], 1);
        assert!(state.shows_empty_message());
        assert!(!ListState::new(ListSource::Unread).shows_empty_message());
    }

    #[test]
    fn test_page_count_shrink_reports_clamp() {
        let mut state = loaded(ListSource::Read, &["1"], 3);
        state.increment_page();
        state.increment_page();
        let request = state.begin_load(None);
        assert_eq!(
            state.finish_load(request.ticket, Ok(page(&[], 2))),
            LoadOutcome::Applied { page_clamped: true }
        );
        assert_eq!(state.pagination().page_number(), 2);
    }
}
