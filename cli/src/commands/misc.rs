use super::{AppContext, FirehoseCommand};
use crate::interactive::{self, Screen};
use firehose::api::BookmarkApi;
use firehose::browser;
use firehose::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenCommand {
    pub id: String,
}

impl FirehoseCommand for OpenCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        let bookmark = ctx.api()?.find_bookmark(&self.id)?;
        eprintln!("Opening: {}", bookmark.attributes.url);
        browser::open_bookmark(&bookmark)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellCommand {
    pub screen: Screen,
}

impl FirehoseCommand for ShellCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        interactive::run_with_context(ctx, self.screen.clone())
    }
}
