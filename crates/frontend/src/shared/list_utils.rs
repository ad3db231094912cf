/// Утилиты для заголовков таблиц: индикатор и CSS-класс сортировки
use crate::shared::data_table::SortDirection;

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Asc) => " ▲",
        Some(SortDirection::Desc) => " ▼",
        None => " ⇅",
    }
}

/// CSS-класс индикатора: активная колонка подсвечивается
pub fn get_sort_class(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(_) => "sort-icon active",
        None => "sort-icon",
    }
}

/// aria-sort для заголовка колонки
pub fn get_aria_sort(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Asc) => "ascending",
        Some(SortDirection::Desc) => "descending",
        None => "none",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicators() {
        assert_eq!(get_sort_indicator(Some(SortDirection::Asc)), " ▲");
        assert_eq!(get_sort_indicator(Some(SortDirection::Desc)), " ▼");
        assert_eq!(get_sort_indicator(None), " ⇅");
        assert_eq!(get_sort_class(None), "sort-icon");
        assert_eq!(get_aria_sort(Some(SortDirection::Desc)), "descending");
    }
}
