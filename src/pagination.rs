//! Page counting and page-number windows for listing pages.

use serde::{Deserialize, Serialize};

/// Number of pages needed to show `total_items` rows `page_size` at a time.
pub fn page_count(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// Returns the page numbers linked around `current_page`.
///
/// When there are fewer pages than `window_size` every page is listed.
/// Otherwise a contiguous window of `window_size` pages is returned, starting
/// `window_size / 2 - 1` pages before the current one and clamped to the valid
/// range `1..=page_count`.
pub fn paginate(current_page: usize, page_count: usize, window_size: usize) -> Vec<usize> {
    if page_count < window_size {
        return (1..=page_count).collect();
    }

    let first = current_page
        .saturating_add(1)
        .saturating_sub(window_size / 2)
        .max(1)
        .min(page_count + 1 - window_size);

    (first..first + window_size).collect()
}

/// Pagination metadata returned by the article data source alongside a page
/// of items.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaginationInfo {
    pub page_count: usize,
    /// Ascending, contiguous window of page numbers to link.
    pub page_nums: Vec<usize>,
}

impl PaginationInfo {
    pub fn new(current_page: usize, page_count: usize, window_size: usize) -> Self {
        Self {
            page_count,
            page_nums: paginate(current_page, page_count, window_size),
        }
    }

    pub fn window(&self) -> PaginationWindow {
        PaginationWindow::from_page_nums(&self.page_nums)
    }
}

/// Boundaries of a page-number window. Both are `None` for an empty window so
/// templates never render a "page 0" link.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PaginationWindow {
    pub first: Option<usize>,
    pub last: Option<usize>,
}

impl PaginationWindow {
    pub fn from_page_nums(page_nums: &[usize]) -> Self {
        Self {
            first: page_nums.first().copied(),
            last: page_nums.last().copied(),
        }
    }
}

/// A page of items together with its pagination metadata.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pagination: PaginationInfo,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, pagination: PaginationInfo) -> Self {
        Self { items, pagination }
    }

    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            pagination: PaginationInfo::default(),
        }
    }
}
