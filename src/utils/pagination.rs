pub const MAX_PER_PAGE: u32 = 100;

/// 1-based page window taken from `?page=&per_page=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
}

impl Pagination {
    pub fn from_query(page: Option<u32>, per_page: Option<u32>, default_per_page: u32) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            per_page: per_page.unwrap_or(default_per_page).clamp(1, MAX_PER_PAGE),
        }
    }

    pub fn offset(&self) -> usize {
        (self.page as usize - 1) * self.per_page as usize
    }

    /// Cuts the window out of `items`; returns it with the total before cutting.
    pub fn apply<T>(&self, items: Vec<T>) -> (Vec<T>, usize) {
        let total = items.len();
        let window = items
            .into_iter()
            .skip(self.offset())
            .take(self.per_page as usize)
            .collect();
        (window, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_inputs() {
        assert_eq!(
            Pagination::from_query(Some(0), Some(1000), 20),
            Pagination { page: 1, per_page: MAX_PER_PAGE }
        );
        assert_eq!(
            Pagination::from_query(None, None, 20),
            Pagination { page: 1, per_page: 20 }
        );
    }

    #[test]
    fn windows_past_the_end_are_empty() {
        let items: Vec<u32> = (1..=25).collect();

        let (second, total) = Pagination::from_query(Some(2), Some(10), 20).apply(items.clone());
        assert_eq!(total, 25);
        assert_eq!(second, (11..=20).collect::<Vec<_>>());

        let (beyond, total) = Pagination::from_query(Some(9), Some(10), 20).apply(items);
        assert_eq!(total, 25);
        assert!(beyond.is_empty());
    }
}
