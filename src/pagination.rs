//! This modules defines the common functionality for paging data.

/// The config for pagination
#[derive(Debug, Clone)]
pub struct PaginationConfig {
    /// The number of transactions to display per page.
    pub page_size: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self { page_size: 10 }
    }
}

/// The number of the last page for `item_count` items.
///
/// An empty list still has one (empty) page.
pub fn last_page(item_count: usize, page_size: usize) -> usize {
    item_count.div_ceil(page_size.max(1)).max(1)
}

/// The items shown on the 1-based page `page_number`.
///
/// Returns an empty slice for pages past the end of `items`.
pub fn visible_rows<T>(items: &[T], page_number: usize, page_size: usize) -> &[T] {
    let start_index = page_number.saturating_sub(1).saturating_mul(page_size);

    if start_index >= items.len() {
        return &[];
    }

    let end_index = start_index + page_size.min(items.len() - start_index);

    &items[start_index..end_index]
}

/// The page after `page_number`, or `page_number` itself on the last page.
pub fn next_page(page_number: usize, item_count: usize, page_size: usize) -> usize {
    if page_number >= last_page(item_count, page_size) {
        page_number
    } else {
        page_number + 1
    }
}

/// The page before `page_number`, or 1 on the first page.
pub fn previous_page(page_number: usize) -> usize {
    if page_number <= 1 { 1 } else { page_number - 1 }
}
