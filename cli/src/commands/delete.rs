use super::{confirm, AppContext, FirehoseCommand};
use crate::spinner::request_with_spinner;
use firehose::api::BookmarkApi;
use firehose::error::Result;
use firehose::models::errors::ListError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteCommand {
    pub id: String,
    pub force: bool,
}

impl FirehoseCommand for DeleteCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        let api = ctx.api()?;

        // Ask for confirmation unless --force
        if !self.force {
            let bookmark = api.find_bookmark(&self.id)?;
            eprintln!(
                "  {}. {} - {}",
                bookmark.id,
                bookmark.display_title(),
                bookmark.attributes.url
            );
            if !confirm("Delete this link?")? {
                eprintln!("Deletion cancelled.");
                return Ok(());
            }
        }

        request_with_spinner(&format!("Deleting {}", self.id), || {
            api.delete_bookmark(&self.id)
        })
        .inspect_err(|_| eprintln!("{}", ListError::Delete))
    }
}
