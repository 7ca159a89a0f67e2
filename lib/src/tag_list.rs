use crate::api::TagApi;
use crate::models::errors::ListError;
use crate::models::tag::{sort_by_name, Tag};
use log::warn;

/// All tags, alphabetically
#[derive(Debug)]
pub struct TagListController<A> {
    api: A,
    tags: Option<Vec<Tag>>,
    error: Option<ListError>,
}

impl<A: TagApi> TagListController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            tags: None,
            error: None,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Fetch and sort; a failure keeps the previously loaded tags
    pub fn load(&mut self) -> bool {
        self.error = None;
        match self.api.all_tags() {
            Ok(mut tags) => {
                sort_by_name(&mut tags);
                self.tags = Some(tags);
                true
            }
            Err(err) => {
                warn!("Failed to load tags: {}", err);
                self.error = Some(ListError::LoadTags);
                false
            }
        }
    }

    /// Reload when the tag list is shown again
    pub fn focus(&mut self) -> bool {
        self.load()
    }

    pub fn tags(&self) -> &[Tag] {
        self.tags.as_deref().unwrap_or(&[])
    }

    pub fn is_loaded(&self) -> bool {
        self.tags.is_some()
    }

    pub fn error(&self) -> Option<ListError> {
        self.error
    }

    /// "No tags." after a successful empty load
    pub fn shows_empty_message(&self) -> bool {
        self.error.is_none() && self.tags.as_ref().is_some_and(|t| t.is_empty())
    }

    pub fn find(&self, name: &str) -> Option<&Tag> {
        self.tags().iter().find(|t| t.name() == name)
    }
}
