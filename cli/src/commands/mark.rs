use super::{AppContext, FirehoseCommand};
use crate::spinner::request_with_spinner;
use firehose::api::BookmarkApi;
use firehose::error::Result;
use firehose::list::Mutation;
use firehose::models::bookmark::BookmarkPatch;
use serde::{Deserialize, Serialize};

/// Flip the read flag of one bookmark
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkCommand {
    pub id: String,
    pub read: bool,
}

impl MarkCommand {
    fn mutation(&self) -> Mutation {
        if self.read {
            Mutation::MarkRead
        } else {
            Mutation::MarkUnread
        }
    }
}

impl FirehoseCommand for MarkCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        let api = ctx.api()?;
        let label = if self.read { "read" } else { "unread" };
        request_with_spinner(&format!("Marking {} {}", self.id, label), || {
            api.update_bookmark(&self.id, &BookmarkPatch::read(self.read))
        })
        .inspect_err(|_| eprintln!("{}", self.mutation().error()))
    }
}
