/// Rows per page in the logs grid.
pub const PAGE_SIZE: usize = 50;

/// Zero-based page cursor. Row counts are passed in rather than stored so
/// the cursor never disagrees with the collection it pages over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pagination {
    page_index: usize,
}

impl Pagination {
    pub fn first() -> Self {
        Self::default()
    }

    pub fn page_index(self) -> usize {
        self.page_index
    }

    /// 1-based page number for display.
    pub fn page_number(self) -> usize {
        self.page_index + 1
    }

    /// Number of pages for `total_rows`; an empty collection still has one.
    pub fn page_count(total_rows: usize) -> usize {
        total_rows.div_ceil(PAGE_SIZE).max(1)
    }

    pub fn can_previous(self) -> bool {
        self.page_index > 0
    }

    pub fn can_next(self, total_rows: usize) -> bool {
        self.page_number() < Self::page_count(total_rows)
    }

    pub fn next(self, total_rows: usize) -> Self {
        if self.can_next(total_rows) {
            Self {
                page_index: self.page_index + 1,
            }
        } else {
            self
        }
    }

    pub fn previous(self) -> Self {
        Self {
            page_index: self.page_index.saturating_sub(1),
        }
    }

    pub fn slice<T>(self, rows: &[T]) -> &[T] {
        let start = (self.page_index * PAGE_SIZE).min(rows.len());
        let end = (start + PAGE_SIZE).min(rows.len());
        &rows[start..end]
    }
}
