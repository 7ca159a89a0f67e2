use crate::error::{FirehoseError, Result};
use crate::models::bookmark::Bookmark;
use log::debug;

/// Open `url` with the system's default handler
pub fn open_url(url: &str) -> Result<()> {
    if url.trim().is_empty() {
        return Err(FirehoseError::InvalidInput("empty URL".to_string()));
    }
    debug!("Opening {}", url);
    open::that(url)?;
    Ok(())
}

pub fn open_bookmark(bookmark: &Bookmark) -> Result<()> {
    open_url(&bookmark.attributes.url)
}
