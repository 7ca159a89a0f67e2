use super::query::ListSource;
use super::state::{
    ActionOutcome, ListState, LoadOutcome, LoadRequest, LoadResponse, LoadingIndicator, Mutation,
};
use crate::api::{BookmarkApi, TagApi};
use crate::models::bookmark::Bookmark;
use crate::models::errors::ListError;
use log::{debug, warn};

/// Drives one bookmark list against the backend
///
/// Owns the [`ListState`] and issues requests in response to user intent.
/// Every call is synchronous; for loads that must not block the caller use
/// [`start_load`](Self::start_load), run the returned request anywhere, and
/// feed the response back through [`complete_load`](Self::complete_load).
#[derive(Debug)]
pub struct BookmarkListController<A> {
    api: A,
    state: ListState,
}

impl<A: BookmarkApi + TagApi> BookmarkListController<A> {
    pub fn new(api: A, source: ListSource) -> Self {
        Self {
            api,
            state: ListState::new(source),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn source(&self) -> &ListSource {
        self.state.source()
    }

    /// First load when the list is shown
    pub fn mount(&mut self) -> LoadOutcome {
        self.load(None)
    }

    /// Reload without an indicator when the list is shown again
    pub fn focus(&mut self) -> LoadOutcome {
        self.load(None)
    }

    pub fn refresh(&mut self, indicator: LoadingIndicator) -> LoadOutcome {
        self.load(Some(indicator))
    }

    pub fn unmount(&mut self) {
        self.state.unmount();
    }

    pub fn start_load(&mut self, indicator: Option<LoadingIndicator>) -> LoadRequest {
        self.state.begin_load(indicator)
    }

    pub fn complete_load(&mut self, response: LoadResponse) -> LoadOutcome {
        let source = self.state.source().clone();
        let result = response.result.map_err(|err| {
            warn!("Failed to load {} list: {}", source, err);
            ListError::Load
        });
        self.state.finish_load(response.ticket, result)
    }

    fn load(&mut self, indicator: Option<LoadingIndicator>) -> LoadOutcome {
        let request = self.start_load(indicator);
        let response = request.execute(&self.api);
        let outcome = self.complete_load(response);

        if outcome == (LoadOutcome::Applied { page_clamped: true }) {
            debug!(
                "{} list: page past the end, reloading page {}",
                self.source(),
                self.state.pagination().page_number()
            );
            let request = self.start_load(indicator);
            let response = request.execute(&self.api);
            return self.complete_load(response);
        }
        outcome
    }

    pub fn set_input(&mut self, text: &str) {
        self.state.set_input(text);
    }

    /// Add `url` to the backend; only offered on the unread list
    pub fn create(&mut self, url: &str) -> ActionOutcome {
        if !self.source().accepts_new_links() || !self.state.begin_create(url) {
            return ActionOutcome::Skipped;
        }

        let result = self.api.create_bookmark(url).map_err(|err| {
            warn!("Failed to add {}: {}", url, err);
            ListError::Create
        });
        self.state.finish_create(result)
    }

    /// Create from whatever is in the add field
    pub fn submit_input(&mut self) -> ActionOutcome {
        let url = self.state.input().to_string();
        self.create(&url)
    }

    pub fn mark_read(&mut self, id: &str) -> ActionOutcome {
        self.mutate(id, Mutation::MarkRead)
    }

    pub fn mark_unread(&mut self, id: &str) -> ActionOutcome {
        self.mutate(id, Mutation::MarkUnread)
    }

    /// Delete after `confirm` approves the record; declining sends nothing
    pub fn delete(&mut self, id: &str, confirm: impl FnOnce(&Bookmark) -> bool) -> ActionOutcome {
        let confirmed = match self.state.records().get(id) {
            Some(bookmark) => confirm(bookmark),
            None => return ActionOutcome::Skipped,
        };
        if !confirmed {
            debug!("Delete of {} cancelled", id);
            return ActionOutcome::Skipped;
        }
        self.mutate(id, Mutation::Delete)
    }

    fn mutate(&mut self, id: &str, mutation: Mutation) -> ActionOutcome {
        if !self.state.begin_mutation(id, mutation) {
            return ActionOutcome::Skipped;
        }

        let result = match mutation.patch() {
            Some(patch) => self.api.update_bookmark(id, &patch),
            None => self.api.delete_bookmark(id),
        }
        .map_err(|err| {
            warn!("{:?} failed for {}: {}", mutation, id, err);
            mutation.error()
        });
        self.state.finish_mutation(id, mutation, result)
    }

    /// Filter by title and reload from page 1; `None` where search isn't offered
    pub fn search(&mut self, text: &str) -> Option<LoadOutcome> {
        if !self.state.set_search(text) {
            return None;
        }
        Some(self.load(None))
    }

    /// `None` at the last page or before the page count is known
    pub fn increment_page(&mut self) -> Option<LoadOutcome> {
        if !self.state.increment_page() {
            return None;
        }
        Some(self.load(None))
    }

    pub fn decrement_page(&mut self) -> Option<LoadOutcome> {
        if !self.state.decrement_page() {
            return None;
        }
        Some(self.load(None))
    }
}
