//! Page cursor and window derivation

use crate::store::RecordStore;
use crate::types::Record;
use std::num::NonZeroUsize;
use tracing::debug;

/// Page size used when none is configured
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Navigation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards page 1
    Previous,
    /// Towards the last page
    Next,
}

/// Pagination cursor with a fixed page size
///
/// Pages are 1-indexed. An empty store still has one (empty) page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageController {
    current_page: usize,
    page_size: NonZeroUsize,
}

impl PageController {
    /// Create a controller positioned on page 1
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            current_page: 1,
            page_size,
        }
    }

    /// Current page (1-indexed)
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Records per page
    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    /// Go back to page 1
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Last reachable page for the given store, never less than 1
    pub fn max_page(&self, store: &RecordStore) -> usize {
        store.len().div_ceil(self.page_size()).max(1)
    }

    /// The records visible on the current page
    ///
    /// Bounds are clamped to the store length, so a cursor past the end
    /// yields a short or empty slice rather than an error.
    pub fn current_slice<'a>(&self, store: &'a RecordStore) -> &'a [Record] {
        let all = store.all();
        let start = (self.current_page - 1)
            .saturating_mul(self.page_size())
            .min(all.len());
        let end = start.saturating_add(self.page_size()).min(all.len());
        &all[start..end]
    }

    /// Move one page in `direction` if the target page exists
    ///
    /// Returns `true` when the cursor moved.
    pub fn advance(&mut self, direction: Direction, store: &RecordStore) -> bool {
        let max_page = self.max_page(store);
        let target = match direction {
            Direction::Previous => self.current_page.checked_sub(1),
            Direction::Next => self.current_page.checked_add(1),
        };

        match target {
            Some(page) if (1..=max_page).contains(&page) => {
                debug!("Page {} -> {} of {}", self.current_page, page, max_page);
                self.current_page = page;
                true
            }
            _ => false,
        }
    }

    /// Human-readable label for the current page
    pub fn page_label(&self) -> String {
        format!("Page {}", self.current_page)
    }
}

impl Default for PageController {
    fn default() -> Self {
        Self::new(NonZeroUsize::new(DEFAULT_PAGE_SIZE).unwrap_or(NonZeroUsize::MIN))
    }
}
