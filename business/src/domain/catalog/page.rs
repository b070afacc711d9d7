pub const DEFAULT_PER_PAGE: u32 = 15;

/// Which slice of a filtered result set to fetch.
///
/// `per_page == 0` is a valid request: it yields no items but still carries
/// the full filtered total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

impl PageRequest {
    /// Normalises untrusted input. Pages below 1 become 1; a page size
    /// of zero or less becomes 0.
    pub fn new(page: i64, per_page: i64) -> Self {
        Self {
            page: page.clamp(1, u32::MAX as i64) as u32,
            per_page: per_page.clamp(0, u32::MAX as i64) as u32,
        }
    }

    pub fn first(per_page: u32) -> Self {
        Self { page: 1, per_page }
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.per_page)
    }

    pub fn is_empty(&self) -> bool {
        self.per_page == 0
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first(DEFAULT_PER_PAGE)
    }
}

/// One page of an ordered result set plus the size of the whole set.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub per_page: u32,
    pub current_page: u32,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            per_page: request.per_page,
            current_page: request.page,
        }
    }

    pub fn empty(total: u64, request: PageRequest) -> Self {
        Self::new(Vec::new(), total, request)
    }

    pub fn last_page(&self) -> u32 {
        if self.per_page == 0 {
            return 1;
        }
        let pages = self.total.div_ceil(u64::from(self.per_page)).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// 1-based position of the first item on this page, `None` when the page is empty.
    pub fn first_item(&self) -> Option<u64> {
        if self.items.is_empty() {
            return None;
        }
        Some(u64::from(self.current_page.saturating_sub(1)) * u64::from(self.per_page) + 1)
    }

    pub fn last_item(&self) -> Option<u64> {
        self.first_item()
            .map(|first| first + self.items.len() as u64 - 1)
    }

    pub fn has_more_pages(&self) -> bool {
        self.current_page < self.last_page()
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            per_page: self.per_page,
            current_page: self.current_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_normalise_out_of_range_requests() {
        assert_eq!(PageRequest::new(0, 15), PageRequest { page: 1, per_page: 15 });
        assert_eq!(PageRequest::new(-4, -1), PageRequest { page: 1, per_page: 0 });
        assert_eq!(PageRequest::new(3, 10).offset(), 20);
        assert!(PageRequest::new(1, 0).is_empty());
    }

    #[test]
    fn should_default_to_first_page_of_fifteen() {
        assert_eq!(PageRequest::default(), PageRequest { page: 1, per_page: 15 });
    }

    #[test]
    fn should_compute_item_range_for_middle_page() {
        let page = Page::new(vec!['a'; 15], 40, PageRequest::new(2, 15));

        assert_eq!(page.last_page(), 3);
        assert_eq!(page.first_item(), Some(16));
        assert_eq!(page.last_item(), Some(30));
        assert!(page.has_more_pages());
    }

    #[test]
    fn should_report_partial_last_page() {
        let page = Page::new(vec!['a'; 10], 40, PageRequest::new(3, 15));

        assert_eq!(page.first_item(), Some(31));
        assert_eq!(page.last_item(), Some(40));
        assert!(!page.has_more_pages());
    }

    #[test]
    fn should_have_no_item_range_when_empty() {
        let page: Page<char> = Page::empty(0, PageRequest::default());

        assert_eq!(page.last_page(), 1);
        assert_eq!(page.first_item(), None);
        assert_eq!(page.last_item(), None);
        assert!(!page.has_more_pages());
    }

    #[test]
    fn should_keep_total_when_page_size_is_zero() {
        let page: Page<char> = Page::empty(42, PageRequest::new(1, 0));

        assert_eq!(page.total, 42);
        assert_eq!(page.last_page(), 1);
        assert!(page.items.is_empty());
    }

    #[test]
    fn should_keep_metadata_when_mapped() {
        let page = Page::new(vec![1, 2], 12, PageRequest::new(6, 2)).map(|n| n * 10);

        assert_eq!(page.items, vec![10, 20]);
        assert_eq!(page.total, 12);
        assert_eq!(page.current_page, 6);
    }
}
