/// Page position of a paginated list
///
/// `max_page_number` is unknown until the first successful fetch, and both
/// directions stay disabled until then. Once known, `1 <= page_number <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_number: u32,
    max_page_number: Option<u32>,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page_number: 1,
            max_page_number: None,
        }
    }
}

impl Pagination {
    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    pub fn max_page_number(&self) -> Option<u32> {
        self.max_page_number
    }

    pub fn can_increment(&self) -> bool {
        matches!(self.max_page_number, Some(max) if self.page_number < max)
    }

    pub fn can_decrement(&self) -> bool {
        self.max_page_number.is_some() && self.page_number > 1
    }

    /// Next page; `false` (and no change) at the last page
    pub fn increment(&mut self) -> bool {
        if !self.can_increment() {
            return false;
        }
        self.page_number += 1;
        true
    }

    /// Previous page; `false` (and no change) at page 1
    pub fn decrement(&mut self) -> bool {
        if !self.can_decrement() {
            return false;
        }
        self.page_number -= 1;
        true
    }

    /// Back to page 1, keeping the known page count
    pub fn reset(&mut self) {
        self.page_number = 1;
    }

    /// Record the server's page count; a count of 0 still means one (empty) page
    ///
    /// Returns `true` when the current page fell past the end and was clamped.
    pub fn set_page_count(&mut self, page_count: u32) -> bool {
        let max = page_count.max(1);
        self.max_page_number = Some(max);
        if self.page_number > max {
            self.page_number = max;
            true
        } else {
            false
        }
    }
}
