use std::ops::Range;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Количество страниц: ceil(total / page_size); 0 для пустого набора
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Индекс последней существующей страницы (0 для пустого набора)
pub fn max_page_index(total: usize, page_size: usize) -> usize {
    page_count(total, page_size).saturating_sub(1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub page_index: usize,
    pub page_size: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PaginationState {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    /// page_index = min(page_index, max_page_index(total, page_size)).
    /// Возвращает true, если индекс изменился.
    pub fn clamp(&mut self, total: usize) -> bool {
        let max = max_page_index(total, self.page_size);
        if self.page_index > max {
            self.page_index = max;
            true
        } else {
            false
        }
    }

    /// Диапазон индексов отфильтрованного набора для текущей страницы
    pub fn range(&self, total: usize) -> Range<usize> {
        let start = (self.page_index * self.page_size).min(total);
        let end = (start + self.page_size).min(total);
        start..end
    }

    pub fn can_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_next(&self, total: usize) -> bool {
        self.page_index + 1 < page_count(total, self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count_is_ceiling() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(25, 10), 3);
    }

    #[test]
    fn test_pages_partition_the_set() {
        let total = 23;
        let mut state = PaginationState::new(10);
        let mut seen = Vec::new();
        for page in 0..page_count(total, 10) {
            state.page_index = page;
            seen.extend(state.range(total));
        }
        assert_eq!(seen, (0..total).collect::<Vec<_>>());
        state.page_index = 2;
        assert_eq!(state.range(total).len(), 3);
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut state = PaginationState::new(10);
        state.page_index = 4;
        assert!(state.clamp(25));
        assert_eq!(state.page_index, 2);
        assert!(!state.clamp(25));
        assert!(state.clamp(0));
        assert_eq!(state.page_index, 0);
    }

    #[test]
    fn test_navigation_bounds() {
        let mut state = PaginationState::new(5);
        assert!(!state.can_previous());
        assert!(state.can_next(6));
        state.page_index = 1;
        assert!(state.can_previous());
        assert!(!state.can_next(6));
    }
}
