use serde::Serialize;

/// One page of results. `page` is 1-based; the backend counts from 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub total_pages: u32,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, page: u32, total_pages: u32) -> Self {
        Self {
            items,
            page: page.max(1),
            total_pages: total_pages.max(1),
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            total_pages: self.total_pages,
        }
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page, self.total_pages)
    }
}

/// Backend page index for a 1-based portal page
pub fn backend_page(page: u32) -> u32 {
    page.saturating_sub(1)
}

/// Prev/next navigation over a page range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub current: u32,
    pub total: u32,
}

impl Pagination {
    pub fn new(current: u32, total: u32) -> Self {
        let total = total.max(1);
        Self {
            current: current.clamp(1, total),
            total,
        }
    }

    /// A single page needs no controls
    pub fn is_visible(&self) -> bool {
        self.total > 1
    }

    pub fn has_prev(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total
    }

    pub fn prev(&self) -> u32 {
        self.current.saturating_sub(1).max(1)
    }

    pub fn next(&self) -> u32 {
        (self.current + 1).min(self.total)
    }

    pub fn pages(&self) -> impl Iterator<Item = u32> {
        1..=self.total
    }
}
