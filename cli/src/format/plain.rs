use crate::format::traits::BookmarkFormat;
use crate::spinner::truncate_url;
use firehose::models::bookmark::Bookmark;

/// Uncoloured row, numbered by display position
pub struct PlainBookmark<'a>(pub usize, pub &'a Bookmark);

impl<'a> BookmarkFormat for PlainBookmark<'a> {
    fn to_string(&self) -> String {
        let PlainBookmark(index, b) = *self;
        let attrs = &b.attributes;
        let mut s = format!("{}. {} [{}]", index, b.display_title(), b.id);
        if attrs.read {
            s.push_str(" (read)");
        }
        s.push('\n');

        let padding = index.to_string().len() + 2;
        let location = b.domain().unwrap_or_else(|| truncate_url(&attrs.url, 60));
        s.push_str(&format!("{:>padding$} {}\n", ">", location));
        if let Some(source) = attrs.source.as_deref().filter(|s| !s.trim().is_empty()) {
            s.push_str(&format!("{:>padding$} From {}\n", "<", source));
        }
        if let Some(comment) = attrs.comment.as_deref().filter(|c| !c.trim().is_empty()) {
            s.push_str(&format!("{:>padding$} {}\n", "+", comment));
        }
        let tags = b.tags();
        if !tags.is_empty() {
            s.push_str(&format!("{:>padding$} {}\n", "#", tags.join(", ")));
        }
        s
    }
}
