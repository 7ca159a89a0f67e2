use crate::models::bookmark::Bookmark;
use std::collections::{BTreeMap, HashMap};

/// The bookmarks a list currently shows, ordered and keyed by id
///
/// Each record sits under a sequence key; `positions` maps ids to those keys,
/// so lookups are O(1) and removals O(log n) without scanning the list.
/// Prepending takes keys below the current head.
#[derive(Debug, Clone, Default)]
pub struct BookmarkCollection {
    entries: BTreeMap<i64, Bookmark>,
    positions: HashMap<String, i64>,
    head: i64,
    tail: i64,
}

impl BookmarkCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a fetched page, keeping the first of any duplicate ids
    pub fn from_records(records: Vec<Bookmark>) -> Self {
        let mut collection = Self::new();
        for record in records {
            if !collection.contains(&record.id) {
                collection.push_back(record);
            }
        }
        collection
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&Bookmark> {
        let key = self.positions.get(id)?;
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Bookmark> {
        let key = self.positions.get(id)?;
        self.entries.get_mut(key)
    }

    /// Record at a 0-based display position
    pub fn nth(&self, index: usize) -> Option<&Bookmark> {
        self.entries.values().nth(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bookmark> {
        self.entries.values()
    }

    pub fn ids(&self) -> Vec<String> {
        self.iter().map(|b| b.id.clone()).collect()
    }

    /// Insert at the head; an existing record with the same id is moved there
    pub fn prepend(&mut self, bookmark: Bookmark) {
        self.remove(&bookmark.id);
        if self.entries.is_empty() {
            self.head = 0;
            self.tail = 0;
        }
        self.head -= 1;
        self.positions.insert(bookmark.id.clone(), self.head);
        self.entries.insert(self.head, bookmark);
    }

    pub fn push_back(&mut self, bookmark: Bookmark) {
        self.remove(&bookmark.id);
        let key = self.tail;
        self.tail += 1;
        self.positions.insert(bookmark.id.clone(), key);
        self.entries.insert(key, bookmark);
    }

    pub fn remove(&mut self, id: &str) -> Option<Bookmark> {
        let key = self.positions.remove(id)?;
        self.entries.remove(&key)
    }

    /// Drop every record whose id satisfies `pred`
    pub fn remove_where(&mut self, mut pred: impl FnMut(&str) -> bool) {
        let doomed: Vec<String> = self
            .positions
            .keys()
            .filter(|id| pred(id))
            .cloned()
            .collect();
        for id in doomed {
            self.remove(&id);
        }
    }

    pub fn to_vec(&self) -> Vec<Bookmark> {
        self.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bookmark(id: &str) -> Bookmark {
        Bookmark::with_title(id, &format!("https://example.com/{}", id), id)
    }

    fn ids(collection: &BookmarkCollection) -> Vec<String> {
        collection.ids()
    }

    #[test]
    fn test_from_records_keeps_order() {
        let collection =
            BookmarkCollection::from_records(vec![bookmark("3"), bookmark("1"), bookmark("2")]);
        assert_eq!(ids(&collection), vec!["3", "1", "2"]);
        assert_eq!(collection.len(), 3);
    }

    #[test]
    fn test_from_records_skips_duplicates() {
        let mut dup = bookmark("1");
        dup.attributes.title = Some("second".to_string());
        let collection = BookmarkCollection::from_records(vec![bookmark("1"), dup]);
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.get("1").unwrap().display_title(), "1");
    }

    #[test]
    fn test_prepend_goes_to_head() {
        let mut collection = BookmarkCollection::from_records(vec![bookmark("1"), bookmark("2")]);
        collection.prepend(bookmark("9"));
        collection.prepend(bookmark("8"));
        assert_eq!(ids(&collection), vec!["8", "9", "1", "2"]);
        assert_eq!(collection.nth(0).unwrap().id, "8");
    }

    #[test]
    fn test_prepend_existing_moves_it() {
        let mut collection =
            BookmarkCollection::from_records(vec![bookmark("1"), bookmark("2"), bookmark("3")]);
        collection.prepend(bookmark("3"));
        assert_eq!(ids(&collection), vec!["3", "1", "2"]);
    }

    #[test]
    fn test_remove() {
        let mut collection =
            BookmarkCollection::from_records(vec![bookmark("1"), bookmark("2"), bookmark("3")]);
        let removed = collection.remove("2").unwrap();
        assert_eq!(removed.id, "2");
        assert!(!collection.contains("2"));
        assert_eq!(ids(&collection), vec!["1", "3"]);
        assert!(collection.remove("2").is_none());
    }

    #[test]
    fn test_remove_where() {
        let mut collection =
            BookmarkCollection::from_records(vec![bookmark("1"), bookmark("2"), bookmark("3")]);
        collection.remove_where(|id| id != "2");
        assert_eq!(ids(&collection), vec!["2"]);
    }

    #[test]
    fn test_get_mut_updates_in_place() {
        let mut collection = BookmarkCollection::from_records(vec![bookmark("1")]);
        collection.get_mut("1").unwrap().attributes.read = true;
        assert!(collection.get("1").unwrap().is_read());
    }

    #[test]
    fn test_prepend_into_empty() {
        let mut collection = BookmarkCollection::new();
        collection.prepend(bookmark("1"));
        collection.push_back(bookmark("2"));
        assert_eq!(ids(&collection), vec!["1", "2"]);
        assert!(collection.nth(2).is_none());
    }
}
