//! Page slicing with bounds clamping.

use nodescope_types::PageSize;
use serde::{Deserialize, Serialize};

/// Pagination metadata for one slice of an ordered view.
///
/// `start_index..end_index` is the half-open range of the slice within the
/// ordered view. `page` is always within `1..=total_pages`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub page: usize,
    pub total_pages: usize,
    pub page_size: PageSize,
    pub start_index: usize,
    pub end_index: usize,
    pub total_count: usize,
}

impl PageInfo {
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// 1-based inclusive range for "showing A-B of N" footers, `None` when empty
    pub fn visible_range(&self) -> Option<(usize, usize)> {
        if self.start_index == self.end_index {
            None
        } else {
            Some((self.start_index + 1, self.end_index))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Page<'a, T> {
    pub rows: &'a [T],
    pub info: PageInfo,
}

/// `max(1, ceil(len / page_size))`
pub fn total_pages(len: usize, page_size: PageSize) -> usize {
    len.div_ceil(page_size.get()).max(1)
}

pub fn page_info(len: usize, page: usize, page_size: PageSize) -> PageInfo {
    let total_pages = total_pages(len, page_size);
    let page = page.clamp(1, total_pages);
    let start_index = ((page - 1) * page_size.get()).min(len);
    let end_index = (start_index + page_size.get()).min(len);

    PageInfo {
        page,
        total_pages,
        page_size,
        start_index,
        end_index,
        total_count: len,
    }
}

/// Slice `records` to the requested page, clamping stale page numbers.
pub fn apply<T>(records: &[T], page: usize, page_size: PageSize) -> Page<'_, T> {
    let info = page_info(records.len(), page, page_size);
    Page {
        rows: &records[info.start_index..info.end_index],
        info,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_has_one_empty_page() {
        let records: Vec<u32> = Vec::new();
        let page = apply(&records, 1, PageSize::Fifty);
        assert!(page.rows.is_empty());
        assert_eq!(page.info.total_pages, 1);
        assert_eq!(page.info.page, 1);
        assert_eq!(page.info.visible_range(), None);
    }

    #[test]
    fn test_last_page_is_partial() {
        let records: Vec<u32> = (0..120).collect();
        let page = apply(&records, 3, PageSize::Fifty);
        assert_eq!(page.info.total_pages, 3);
        assert_eq!(page.rows, &records[100..120]);
        assert_eq!(page.info.visible_range(), Some((101, 120)));
        assert!(!page.info.has_next());
        assert!(page.info.has_prev());
    }

    #[test]
    fn test_stale_page_is_clamped() {
        let records: Vec<u32> = (0..60).collect();
        let page = apply(&records, 7, PageSize::Fifty);
        assert_eq!(page.info.page, 2);
        assert_eq!(page.rows.len(), 10);
    }

    #[test]
    fn test_page_zero_is_first_page() {
        let records: Vec<u32> = (0..10).collect();
        let page = apply(&records, 0, PageSize::Fifty);
        assert_eq!(page.info.page, 1);
        assert_eq!(page.info.start_index, 0);
        assert_eq!(page.info.end_index, 10);
    }

    #[test]
    fn test_exact_multiple_does_not_add_page() {
        assert_eq!(total_pages(200, PageSize::Hundred), 2);
        assert_eq!(total_pages(201, PageSize::Hundred), 3);
    }
}
