/// Split a bookmark's space-delimited `tag-list` into tag names
///
/// Runs of spaces never produce empty tags, so `""` yields no tags at all.
pub fn tag_list_to_tags(tag_list: &str) -> Vec<String> {
    tag_list
        .split(' ')
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// Inverse of [`tag_list_to_tags`]
pub fn tags_to_tag_list(tags: &[String]) -> String {
    tags.join(" ")
}
