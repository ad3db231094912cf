use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Активная сортировка (в этой системе: не более одной колонки)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSort {
    pub id: String,
    pub direction: SortDirection,
}

impl ColumnSort {
    pub fn asc(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            direction: SortDirection::Desc,
        }
    }
}

/// Следующее состояние сортировки по клику на заголовок: asc → desc → off.
/// Клик по другой колонке начинает цикл заново.
pub fn next_sort(current: Option<&ColumnSort>, column_id: &str) -> Option<ColumnSort> {
    match current {
        Some(sort) if sort.id == column_id => match sort.direction {
            SortDirection::Asc => Some(ColumnSort::desc(column_id)),
            SortDirection::Desc => None,
        },
        _ => Some(ColumnSort::asc(column_id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_cycle() {
        let first = next_sort(None, "zone");
        assert_eq!(first, Some(ColumnSort::asc("zone")));
        let second = next_sort(first.as_ref(), "zone");
        assert_eq!(second, Some(ColumnSort::desc("zone")));
        assert_eq!(next_sort(second.as_ref(), "zone"), None);
    }

    #[test]
    fn test_other_column_restarts_cycle() {
        let current = ColumnSort::desc("zone");
        assert_eq!(next_sort(Some(&current), "name"), Some(ColumnSort::asc("name")));
    }
}
