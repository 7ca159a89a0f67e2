use super::{AppContext, FirehoseCommand};
use crate::spinner::with_spinner;
use firehose::detail::{BookmarkDetail, BookmarkDraft};
use firehose::error::{FirehoseError, Result};
use firehose::list::ActionOutcome;
use firehose::models::errors::ListError;
use serde::{Deserialize, Serialize};

fn load_detail<A: firehose::api::BookmarkApi>(api: A, id: &str) -> Result<BookmarkDetail<A>> {
    let mut detail = BookmarkDetail::new(api, id);
    if !with_spinner("Loading link", || detail.load()) {
        eprintln!("{}", ListError::LoadLink);
        return Err(FirehoseError::BookmarkNotFound(id.to_string()));
    }
    Ok(detail)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowCommand {
    pub id: String,
}

impl FirehoseCommand for ShowCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        let detail = load_detail(ctx.api()?, &self.id)?;
        if let Some(bookmark) = detail.bookmark() {
            ctx.format.print_bookmarks(std::slice::from_ref(bookmark));
        }
        Ok(())
    }
}

/// Replace some fields of a bookmark; the rest are sent back unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditCommand {
    pub id: String,
    pub url: Option<String>,
    pub title: Option<String>,
    pub tags: Option<Vec<String>>,
    pub source: Option<String>,
    pub comment: Option<String>,
}

impl EditCommand {
    fn has_changes(&self) -> bool {
        self.url.is_some()
            || self.title.is_some()
            || self.tags.is_some()
            || self.source.is_some()
            || self.comment.is_some()
    }

    fn apply_to(&self, draft: &mut BookmarkDraft) {
        if let Some(url) = &self.url {
            draft.url = url.clone();
        }
        if let Some(title) = &self.title {
            draft.title = title.clone();
        }
        if let Some(tags) = &self.tags {
            draft.tag_list = firehose::tags::tags_to_tag_list(tags);
        }
        if let Some(source) = &self.source {
            draft.source = source.clone();
        }
        if let Some(comment) = &self.comment {
            draft.comment = comment.clone();
        }
    }
}

impl FirehoseCommand for EditCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        if !self.has_changes() {
            eprintln!("Nothing to update. Use --url, --title, --tags, --source or --comment.");
            return Ok(());
        }

        let mut detail = load_detail(ctx.api()?, &self.id)?;
        if let Some(draft) = detail.draft_mut() {
            self.apply_to(draft);
        }

        match with_spinner("Saving link", || detail.save()) {
            ActionOutcome::Failed(err) => {
                eprintln!("{}", err);
                Err(FirehoseError::Other(err.to_string()))
            }
            _ => {
                if let Some(bookmark) = detail.bookmark() {
                    ctx.format.print_bookmarks(std::slice::from_ref(bookmark));
                }
                Ok(())
            }
        }
    }
}
