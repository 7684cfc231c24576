//! The shared pagination cursor.

use serde::{Deserialize, Serialize};

/// Pagination cursor and the totals reported by the last successful fetch.
///
/// There is one `PaginationState` per client, shared by all four resource
/// types. Fetching products and then stores advances the same
/// `current_page`. Callers alternating between resources should pass an
/// explicit page or use one client per resource.
///
/// Until the first successful fetch, `total_pages` is `1` and `total_count`
/// is `0`. These are placeholders, not server values.
///
/// # Example
///
/// ```rust
/// use bestbuy_catalog::PaginationState;
///
/// let state = PaginationState::default();
/// assert_eq!(state.current_page, 1);
/// assert_eq!(state.total_pages, 1);
/// assert_eq!(state.total_count, 0);
/// assert!(state.has_more());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    /// The page requested when no explicit page is given.
    pub current_page: u32,
    /// Total number of pages, as reported by the server.
    pub total_pages: u32,
    /// Total number of matching items, as reported by the server.
    pub total_count: u64,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            total_count: 0,
        }
    }
}

impl PaginationState {
    /// Returns `true` while the cursor has not moved past the last page.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.current_page <= self.total_pages
    }

    /// Records a successful read of `page`.
    ///
    /// The cursor always moves to `page + 1`. When `page` was taken from the
    /// cursor, that is the same as advancing by one.
    pub(crate) fn record_success(&mut self, page: u32, total_pages: u32, total_count: u64) {
        self.current_page = page.saturating_add(1);
        self.total_pages = total_pages;
        self.total_count = total_count;
    }
}
