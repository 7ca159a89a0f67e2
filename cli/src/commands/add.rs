use super::{AppContext, FirehoseCommand};
use crate::spinner::{request_with_spinner, truncate_url};
use firehose::api::BookmarkApi;
use firehose::error::{FirehoseError, Result};
use firehose::models::errors::ListError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddCommand {
    pub url: String,
}

impl FirehoseCommand for AddCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        if self.url.is_empty() {
            return Err(FirehoseError::InvalidInput("URL is empty".to_string()));
        }

        let api = ctx.api()?;
        let message = format!("Adding {}", truncate_url(&self.url, 60));
        let bookmark = request_with_spinner(&message, || api.create_bookmark(&self.url))
            .inspect_err(|_| eprintln!("{}", ListError::Create))?;

        ctx.format.print_bookmarks(std::slice::from_ref(&bookmark));
        Ok(())
    }
}
