//! Pagination counts for the home index and listing pages.

use crate::config::SiteConfig;
use std::{num::NonZeroUsize, ops::Range};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub per_index: NonZeroUsize,
    pub per_page: NonZeroUsize,
}

impl Pagination {
    pub const fn from_config(config: &SiteConfig) -> Self {
        Self {
            per_index: config.post_per_index,
            per_page: config.post_per_page,
        }
    }

    /// Posts shown on the home index.
    pub fn index_count(&self, total: usize) -> usize {
        total.min(self.per_index.get())
    }

    /// Number of listing pages; zero when there are no posts.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.per_page.get())
    }

    /// Post indices shown on 1-based `page`, `None` past the last page.
    pub fn page_range(&self, page: usize, total: usize) -> Option<Range<usize>> {
        if page == 0 || page > self.page_count(total) {
            return None;
        }
        let start = (page - 1) * self.per_page.get();
        let end = start.saturating_add(self.per_page.get()).min(total);
        Some(start..end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SITE;

    fn pagination(per_index: usize, per_page: usize) -> Pagination {
        Pagination {
            per_index: NonZeroUsize::new(per_index).unwrap(),
            per_page: NonZeroUsize::new(per_page).unwrap(),
        }
    }

    #[test]
    fn test_from_builtin() {
        let p = Pagination::from_config(&SITE);
        assert_eq!(p.per_index.get(), 4);
        assert_eq!(p.per_page.get(), 4);
    }

    #[test]
    fn test_index_count() {
        let p = pagination(4, 4);
        assert_eq!(p.index_count(0), 0);
        assert_eq!(p.index_count(3), 3);
        assert_eq!(p.index_count(10), 4);
    }

    #[test]
    fn test_page_count() {
        let p = pagination(4, 4);
        assert_eq!(p.page_count(0), 0);
        assert_eq!(p.page_count(1), 1);
        assert_eq!(p.page_count(4), 1);
        assert_eq!(p.page_count(5), 2);
        assert_eq!(p.page_count(9), 3);
    }

    #[test]
    fn test_page_range() {
        let p = pagination(4, 4);
        assert_eq!(p.page_range(1, 9), Some(0..4));
        assert_eq!(p.page_range(2, 9), Some(4..8));
        assert_eq!(p.page_range(3, 9), Some(8..9));
        assert_eq!(p.page_range(4, 9), None);
        assert_eq!(p.page_range(0, 9), None);
        assert_eq!(p.page_range(1, 0), None);
    }

    #[test]
    fn test_page_range_near_usize_max() {
        let p = pagination(4, i64::MAX as usize);
        let total = usize::MAX;
        assert_eq!(p.page_count(total), 3);
        assert_eq!(p.page_range(2, total), Some(i64::MAX as usize..2 * (i64::MAX as usize)));
        assert_eq!(p.page_range(3, total), Some(2 * (i64::MAX as usize)..usize::MAX));
        assert_eq!(p.page_range(4, total), None);
    }
}
