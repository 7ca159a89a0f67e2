use crate::spinner::truncate_url;
use firehose::models::bookmark::Bookmark;
use owo_colors::OwoColorize;

pub trait Colorize {
    fn to_colored(&self) -> String;
}

/// A list row: position, title, domain, source, comment and tag chips
pub struct ColorizeBookmark<'a>(pub usize, pub &'a Bookmark);

impl<'a> Colorize for ColorizeBookmark<'a> {
    fn to_colored(&self) -> String {
        let ColorizeBookmark(index, b) = *self;
        let attrs = &b.attributes;
        let mut s = String::new();
        let position = index.to_string();
        s.push_str(&format!(
            "{}. {} {}",
            position.bright_blue(),
            b.display_title().bold().green(),
            format!("[{}]", b.id).dimmed(),
        ));
        if attrs.read {
            s.push_str(&format!(" {}", "✓".cyan()));
        }
        s.push('\n');

        let padding = position.len() + 2;
        let location = b.domain().unwrap_or_else(|| truncate_url(&attrs.url, 60));
        s.push_str(&format!("{:>padding$} {}\n", ">".red(), location.yellow()));

        if let Some(source) = attrs.source.as_deref().filter(|s| !s.trim().is_empty()) {
            s.push_str(&format!("{:>padding$} From {}\n", "<".red(), source.italic()));
        }

        if let Some(comment) = attrs.comment.as_deref().filter(|c| !c.trim().is_empty()) {
            s.push_str(&format!("{:>padding$} {}\n", "+".red(), comment));
        }

        let tags = b.tags();
        if !tags.is_empty() {
            let chips: Vec<String> = tags.iter().map(|t| format!("{}", t.blue())).collect();
            s.push_str(&format!("{:>padding$} {}\n", "#".red(), chips.join(", ")));
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn bookmark(tag_list: &str, comment: &str) -> Bookmark {
        let mut b = Bookmark::with_title("9", "https://rust-lang.org", "Rust Programming Language");
        b.attributes.tag_list = Some(tag_list.to_string());
        b.attributes.comment = Some(comment.to_string());
        b
    }

    #[test]
    fn test_colorize_output_structure() {
        let colorized = ColorizeBookmark(1, &bookmark("rust programming", "Official")).to_colored();
        let lines: Vec<&str> = colorized.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Rust Programming Language"));
        assert!(lines[0].contains("[9]"));
        assert!(lines[1].contains("rust-lang.org"));
        assert!(lines[2].contains("Official"));
        assert!(lines[3].contains("rust"));
        assert!(lines[3].contains("programming"));
    }

    #[rstest]
    #[case("", "note", false)]
    #[case("   ", "note", false)]
    #[case("web", "", true)]
    fn test_optional_lines(#[case] tag_list: &str, #[case] comment: &str, #[case] has_tags: bool) {
        let colorized = ColorizeBookmark(1, &bookmark(tag_list, comment)).to_colored();
        assert_eq!(colorized.contains('#'), has_tags);
        assert_eq!(colorized.contains('+'), !comment.is_empty());
    }

    #[test]
    fn test_source_line() {
        let mut b = bookmark("", "");
        b.attributes.source = Some("https://news.ycombinator.com".to_string());
        let colorized = ColorizeBookmark(2, &b).to_colored();
        assert!(colorized.contains("From"));
        assert!(colorized.contains("news.ycombinator.com"));
    }
}
