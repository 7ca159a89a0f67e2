use super::{AppContext, FirehoseCommand};
use crate::spinner::request_with_spinner;
use firehose::api::{BookmarkApi, TagApi};
use firehose::error::Result;
use firehose::list::{ListSource, LoadTarget, Page};
use firehose::models::errors::ListError;
use serde::{Deserialize, Serialize};

/// Print one page of the unread or read list, or every bookmark of a tag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListCommand {
    pub source: ListSource,
    pub search: Option<String>,
    pub page: Option<u32>,
}

impl ListCommand {
    pub fn new(source: ListSource) -> Self {
        Self {
            source,
            search: None,
            page: None,
        }
    }

    fn target(&self) -> LoadTarget {
        LoadTarget::new(
            &self.source,
            self.search.as_deref().unwrap_or(""),
            self.page.unwrap_or(1),
        )
    }

    pub fn fetch<A: BookmarkApi + TagApi>(&self, api: &A) -> Result<Page> {
        self.target().fetch(api)
    }
}

impl FirehoseCommand for ListCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        let api = ctx.api()?;
        let page = request_with_spinner(&format!("Loading {}", self.source), || self.fetch(&api))
            .inspect_err(|_| eprintln!("{}", ListError::Load))?;

        if page.records.is_empty() {
            eprintln!("No links.");
        } else {
            ctx.format.print_bookmarks(&page.records);
        }

        if self.source.paginates() {
            eprintln!(
                "Page {} of {}",
                self.page.unwrap_or(1).max(1),
                page.total_pages.max(1)
            );
        }
        Ok(())
    }
}
