use super::{AppContext, FirehoseCommand};
use crate::spinner::with_spinner;
use firehose::error::{FirehoseError, Result};
use firehose::tag_list::TagListController;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagsCommand;

impl FirehoseCommand for TagsCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        let mut tags = TagListController::new(ctx.api()?);
        if !with_spinner("Loading tags", || tags.load()) {
            let message = tags.error().map(|e| e.to_string()).unwrap_or_default();
            eprintln!("{}", message);
            return Err(FirehoseError::Other(message));
        }

        if tags.shows_empty_message() {
            eprintln!("No tags.");
        } else {
            print!("{}", ctx.format.render_tags(tags.tags()));
        }
        Ok(())
    }
}
