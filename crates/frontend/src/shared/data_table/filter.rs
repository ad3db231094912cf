use std::collections::BTreeSet;

use super::column::{CellValue, TextMatch};
use super::text::{fold_case, fold_diacritics};

/// Значение фильтра колонки
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    /// Подстрока
    Text(String),
    /// Точное совпадение с одним из значений
    Values(BTreeSet<String>),
}

impl FilterValue {
    pub fn text(s: impl Into<String>) -> Self {
        FilterValue::Text(s.into())
    }

    pub fn values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FilterValue::Values(values.into_iter().map(Into::into).collect())
    }

    /// Пустой фильтр не активен и из состояния удаляется
    pub fn is_empty(&self) -> bool {
        match self {
            FilterValue::Text(s) => s.trim().is_empty(),
            FilterValue::Values(v) => v.is_empty(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FilterValue::Text(s) => Some(s),
            FilterValue::Values(_) => None,
        }
    }

    pub fn as_values(&self) -> Option<&BTreeSet<String>> {
        match self {
            FilterValue::Values(v) => Some(v),
            FilterValue::Text(_) => None,
        }
    }

    pub fn matches(&self, cell: &CellValue, text_match: TextMatch) -> bool {
        match self {
            FilterValue::Text(needle) => {
                let needle = needle.trim();
                if needle.is_empty() {
                    return true;
                }
                let haystack = cell.display();
                match text_match {
                    TextMatch::CaseInsensitive => fold_case(&haystack).contains(&fold_case(needle)),
                    TextMatch::IgnoreAccents => {
                        fold_diacritics(&haystack).contains(&fold_diacritics(needle))
                    }
                }
            }
            FilterValue::Values(allowed) => {
                allowed.is_empty() || (!cell.is_empty() && allowed.contains(&cell.display()))
            }
        }
    }
}

/// Активный фильтр одной колонки
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnFilter {
    pub id: String,
    pub value: FilterValue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_filter_is_case_insensitive_substring() {
        let filter = FilterValue::text("CARL");
        assert!(filter.matches(&CellValue::text("Carlos"), TextMatch::CaseInsensitive));
        assert!(!filter.matches(&CellValue::Empty, TextMatch::CaseInsensitive));
    }

    #[test]
    fn test_accent_insensitive_match() {
        let filter = FilterValue::text("gomez");
        let cell = CellValue::text("Ana Gómez");
        assert!(filter.matches(&cell, TextMatch::IgnoreAccents));
        assert!(!filter.matches(&cell, TextMatch::CaseInsensitive));
    }

    #[test]
    fn test_accent_insensitive_match_decomposed_cell() {
        let cell = CellValue::text("Ana Go\u{301}mez");
        assert!(FilterValue::text("gomez").matches(&cell, TextMatch::IgnoreAccents));
        assert!(FilterValue::text("GÓMEZ").matches(&cell, TextMatch::IgnoreAccents));
    }

    #[test]
    fn test_values_filter_is_exact_membership() {
        let filter = FilterValue::values(["Norte", "Sur"]);
        assert!(filter.matches(&CellValue::text("Sur"), TextMatch::default()));
        assert!(!filter.matches(&CellValue::text("Sureste"), TextMatch::default()));
        assert!(!filter.matches(&CellValue::text("norte"), TextMatch::default()));
        assert!(!filter.matches(&CellValue::Empty, TextMatch::default()));
    }

    #[test]
    fn test_numbers_match_by_display() {
        let filter = FilterValue::values(["5"]);
        assert!(filter.matches(&CellValue::Number(5.0), TextMatch::default()));
    }
}
