//! Viewing and editing a single bookmark

use crate::api::BookmarkApi;
use crate::list::ActionOutcome;
use crate::models::bookmark::{Bookmark, BookmarkAttributes, BookmarkPatch};
use crate::models::errors::ListError;
use crate::tags::tag_list_to_tags;
use log::{debug, warn};

/// Editable fields of a bookmark, as plain text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkDraft {
    pub url: String,
    pub title: String,
    pub source: String,
    pub comment: String,
    /// Space-delimited
    pub tag_list: String,
}

impl BookmarkDraft {
    pub fn from_attributes(attributes: &BookmarkAttributes) -> Self {
        Self {
            url: attributes.url.clone(),
            title: attributes.title.clone().unwrap_or_default(),
            source: attributes.source.clone().unwrap_or_default(),
            comment: attributes.comment.clone().unwrap_or_default(),
            tag_list: attributes.tag_list.clone().unwrap_or_default(),
        }
    }

    pub fn tags(&self) -> Vec<String> {
        tag_list_to_tags(&self.tag_list)
    }

    /// Every editable field, changed or not
    pub fn to_patch(&self) -> BookmarkPatch {
        BookmarkPatch {
            url: Some(self.url.clone()),
            title: Some(self.title.clone()),
            comment: Some(self.comment.clone()),
            source: Some(self.source.clone()),
            tag_list: Some(self.tag_list.clone()),
            read: None,
        }
    }
}

#[derive(Debug)]
pub struct BookmarkDetail<A> {
    api: A,
    id: String,
    bookmark: Option<Bookmark>,
    draft: Option<BookmarkDraft>,
    error: Option<ListError>,
}

impl<A: BookmarkApi> BookmarkDetail<A> {
    pub fn new(api: A, id: impl Into<String>) -> Self {
        Self {
            api,
            id: id.into(),
            bookmark: None,
            draft: None,
            error: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn bookmark(&self) -> Option<&Bookmark> {
        self.bookmark.as_ref()
    }

    pub fn draft(&self) -> Option<&BookmarkDraft> {
        self.draft.as_ref()
    }

    pub fn draft_mut(&mut self) -> Option<&mut BookmarkDraft> {
        self.draft.as_mut()
    }

    pub fn error(&self) -> Option<ListError> {
        self.error
    }

    /// Fetch the record and reset the draft to its values
    pub fn load(&mut self) -> bool {
        self.error = None;
        match self.api.find_bookmark(&self.id) {
            Ok(bookmark) => {
                self.draft = Some(BookmarkDraft::from_attributes(&bookmark.attributes));
                self.bookmark = Some(bookmark);
                true
            }
            Err(err) => {
                warn!("Failed to load bookmark {}: {}", self.id, err);
                self.error = Some(ListError::LoadLink);
                false
            }
        }
    }

    /// Send the whole draft; the draft stays as typed if the save fails
    pub fn save(&mut self) -> ActionOutcome {
        let Some(draft) = &self.draft else {
            return ActionOutcome::Skipped;
        };
        self.error = None;

        let patch = draft.to_patch();
        debug!("Saving bookmark {}", self.id);
        match self.api.update_bookmark(&self.id, &patch) {
            Ok(()) => {
                if let Some(bookmark) = self.bookmark.as_mut() {
                    bookmark.apply(&patch);
                }
                ActionOutcome::Applied
            }
            Err(err) => {
                warn!("Failed to save bookmark {}: {}", self.id, err);
                self.error = Some(ListError::Save);
                ActionOutcome::Failed(ListError::Save)
            }
        }
    }
}
