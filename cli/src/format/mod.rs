use crate::{
    format::{json::JsonBookmark, plain::PlainBookmark, traits::BookmarkFormat},
    output::colorize::{Colorize, ColorizeBookmark},
};
use firehose::models::bookmark::Bookmark;
use firehose::models::tag::Tag;

pub mod json;
pub mod plain;
pub mod traits;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Plain,
    Colored,
}

impl OutputFormat {
    pub fn from_string(format: &str) -> Self {
        match format {
            "json" => OutputFormat::Json,
            "plain" | "text" => OutputFormat::Plain,
            _ => OutputFormat::Colored,
        }
    }

    /// `--nc` turns colored output into plain
    pub fn resolve(format: Option<&str>, no_color: bool) -> Self {
        match format.map(Self::from_string).unwrap_or(OutputFormat::Colored) {
            OutputFormat::Colored if no_color => OutputFormat::Plain,
            other => other,
        }
    }

    /// Rows numbered from `first_index`
    pub fn render_bookmarks<'a>(
        self,
        records: impl IntoIterator<Item = &'a Bookmark>,
        first_index: usize,
    ) -> String {
        let mut out = String::new();
        for (offset, b) in records.into_iter().enumerate() {
            let index = first_index + offset;
            let row = match self {
                OutputFormat::Json => JsonBookmark(b).to_string(),
                OutputFormat::Plain => PlainBookmark(index, b).to_string(),
                OutputFormat::Colored => ColorizeBookmark(index, b).to_colored(),
            };
            out.push_str(&row);
            out.push('\n');
        }
        out
    }

    pub fn print_bookmarks(self, records: &[Bookmark]) {
        print!("{}", self.render_bookmarks(records, 1));
    }

    pub fn render_tags(self, tags: &[Tag]) -> String {
        match self {
            OutputFormat::Json => {
                let names: Vec<&str> = tags.iter().map(|t| t.name()).collect();
                serde_json::to_string_pretty(&names).unwrap_or_default() + "\n"
            }
            OutputFormat::Plain | OutputFormat::Colored => tags
                .iter()
                .enumerate()
                .map(|(i, t)| format!("{}. {}\n", i + 1, t.name()))
                .collect(),
        }
    }
}
