use std::collections::{BTreeSet, HashSet};

use super::filter::{ColumnFilter, FilterValue};
use super::pagination::PaginationState;
use super::selection::{self, SelectionMode};
use super::sorting::{next_sort, ColumnSort, SortDirection};

/// Состояние представления одной таблицы. Живёт только в памяти и
/// сбрасывается вместе с контроллером.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableState {
    pub sorting: Option<ColumnSort>,
    /// Не более одного фильтра на колонку
    pub filters: Vec<ColumnFilter>,
    pub hidden: BTreeSet<String>,
    pub selected: BTreeSet<String>,
    pub selection_mode: SelectionMode,
    pub pagination: PaginationState,
}

impl TableState {
    pub fn new(page_size: usize, selection_mode: SelectionMode) -> Self {
        Self {
            pagination: PaginationState::new(page_size),
            selection_mode,
            ..Self::default()
        }
    }

    // ── Фильтры ──────────────────────────────────────────────────────────

    pub fn filter_value(&self, column_id: &str) -> Option<&FilterValue> {
        self.filters
            .iter()
            .find(|f| f.id == column_id)
            .map(|f| &f.value)
    }

    /// Устанавливает или снимает (None / пустое значение) фильтр колонки.
    /// Изменение фильтра возвращает таблицу на первую страницу.
    pub fn set_filter(&mut self, column_id: &str, value: Option<FilterValue>) {
        let value = value.filter(|v| !v.is_empty());
        let before = self.filter_value(column_id).cloned();
        if before == value {
            return;
        }
        self.filters.retain(|f| f.id != column_id);
        if let Some(value) = value {
            self.filters.push(ColumnFilter {
                id: column_id.to_string(),
                value,
            });
        }
        self.pagination.page_index = 0;
    }

    /// Переключает одно значение фасетного фильтра. `single`: режим Select:
    /// выбранное значение заменяет прежнее.
    pub fn toggle_filter_value(&mut self, column_id: &str, value: &str, single: bool) {
        let mut values = self
            .filter_value(column_id)
            .and_then(|v| v.as_values().cloned())
            .unwrap_or_default();
        if values.contains(value) {
            values.remove(value);
        } else {
            if single {
                values.clear();
            }
            values.insert(value.to_string());
        }
        self.set_filter(column_id, Some(FilterValue::Values(values)));
    }

    pub fn is_filtered(&self) -> bool {
        !self.filters.is_empty()
    }

    pub fn reset_filters(&mut self) {
        if self.filters.is_empty() {
            return;
        }
        self.filters.clear();
        self.pagination.page_index = 0;
    }

    // ── Сортировка ───────────────────────────────────────────────────────

    pub fn sort_direction(&self, column_id: &str) -> Option<SortDirection> {
        self.sorting
            .as_ref()
            .filter(|s| s.id == column_id)
            .map(|s| s.direction)
    }

    /// asc → desc → off
    pub fn toggle_sort(&mut self, column_id: &str) {
        self.sorting = next_sort(self.sorting.as_ref(), column_id);
    }

    // ── Видимость колонок ────────────────────────────────────────────────

    pub fn is_visible(&self, column_id: &str) -> bool {
        !self.hidden.contains(column_id)
    }

    pub fn toggle_visibility(&mut self, column_id: &str) {
        if !self.hidden.remove(column_id) {
            self.hidden.insert(column_id.to_string());
        }
    }

    // ── Выбор строк ──────────────────────────────────────────────────────

    pub fn is_selected(&self, row_id: &str) -> bool {
        self.selected.contains(row_id)
    }

    pub fn toggle_row(&mut self, row_id: &str, value: bool) {
        selection::toggle(&mut self.selected, self.selection_mode, row_id, value);
    }

    /// Выбрать/снять все переданные строки (только в режиме Multi)
    pub fn set_rows_selected<'a, I>(&mut self, row_ids: I, value: bool)
    where
        I: IntoIterator<Item = &'a str>,
    {
        if self.selection_mode != SelectionMode::Multi {
            return;
        }
        for id in row_ids {
            selection::toggle(&mut self.selected, self.selection_mode, id, value);
        }
    }

    pub fn reset_selection(&mut self) {
        self.selected.clear();
    }

    /// Убирает из выбора строки, которых больше нет в данных
    pub fn retain_selected<F>(&mut self, mut exists: F)
    where
        F: FnMut(&str) -> bool,
    {
        self.selected.retain(|id| exists(id));
    }

    // ── Пагинация ────────────────────────────────────────────────────────

    /// Переход на страницу с ограничением по количеству отфильтрованных строк
    pub fn set_page_index(&mut self, page_index: usize, filtered_count: usize) {
        self.pagination.page_index = page_index;
        self.pagination.clamp(filtered_count);
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.pagination.page_size = page_size.max(1);
        self.pagination.page_index = 0;
    }

    pub fn clamp_page(&mut self, filtered_count: usize) -> bool {
        self.pagination.clamp(filtered_count)
    }

    // ── Замена данных ────────────────────────────────────────────────────

    /// true, если состояние согласовано с новым набором строк: страница
    /// существует и все выбранные id присутствуют в `keys`.
    pub fn fits_rows(&self, keys: &HashSet<String>, filtered_count: usize) -> bool {
        let mut pagination = self.pagination;
        !pagination.clamp(filtered_count) && self.selected.iter().all(|id| keys.contains(id))
    }

    /// Массив строк заменён: индекс страницы ограничивается последней
    /// существующей страницей, из выбора удаляются исчезнувшие строки.
    /// Возвращает true, если что-то изменилось.
    pub fn on_rows_replaced(&mut self, keys: &HashSet<String>, filtered_count: usize) -> bool {
        let clamped = self.clamp_page(filtered_count);
        let before = self.selected.len();
        self.retain_selected(|id| keys.contains(id));
        clamped || self.selected.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_filter_per_column() {
        let mut state = TableState::new(10, SelectionMode::Disabled);
        state.set_filter("zone", Some(FilterValue::values(["Norte"])));
        state.set_filter("zone", Some(FilterValue::values(["Sur"])));
        assert_eq!(state.filters.len(), 1);
        assert_eq!(state.filter_value("zone"), Some(&FilterValue::values(["Sur"])));
    }

    #[test]
    fn test_empty_filter_is_removed() {
        let mut state = TableState::default();
        state.set_filter("name", Some(FilterValue::text("ana")));
        state.set_filter("name", Some(FilterValue::text("  ")));
        assert!(!state.is_filtered());
    }

    #[test]
    fn test_filter_change_returns_to_first_page() {
        let mut state = TableState::new(10, SelectionMode::Disabled);
        state.set_page_index(3, 100);
        state.set_filter("name", Some(FilterValue::text("a")));
        assert_eq!(state.pagination.page_index, 0);
    }

    #[test]
    fn test_toggle_filter_value_single_and_multi() {
        let mut state = TableState::default();
        state.toggle_filter_value("zone", "Norte", false);
        state.toggle_filter_value("zone", "Sur", false);
        assert_eq!(state.filter_value("zone"), Some(&FilterValue::values(["Norte", "Sur"])));
        state.toggle_filter_value("zone", "Este", true);
        assert_eq!(state.filter_value("zone"), Some(&FilterValue::values(["Este"])));
        state.toggle_filter_value("zone", "Este", true);
        assert_eq!(state.filter_value("zone"), None);
    }

    #[test]
    fn test_reset_filters() {
        let mut state = TableState::default();
        state.set_filter("a", Some(FilterValue::text("x")));
        state.set_filter("b", Some(FilterValue::values(["y"])));
        state.reset_filters();
        assert!(state.filters.is_empty());
    }

    #[test]
    fn test_set_page_index_is_clamped() {
        let mut state = TableState::new(10, SelectionMode::Disabled);
        state.set_page_index(9, 15);
        assert_eq!(state.pagination.page_index, 1);
    }

    #[test]
    fn test_select_all_refused_in_single_mode() {
        let mut state = TableState::new(10, SelectionMode::Single);
        state.set_rows_selected(["1", "2"], true);
        assert!(state.selected.is_empty());

        let mut state = TableState::new(10, SelectionMode::Multi);
        state.set_rows_selected(["1", "2"], true);
        assert_eq!(state.selected.len(), 2);
        state.set_rows_selected(["1", "2"], false);
        assert!(state.selected.is_empty());
    }

    #[test]
    fn test_visibility_toggle() {
        let mut state = TableState::default();
        assert!(state.is_visible("description"));
        state.toggle_visibility("description");
        assert!(!state.is_visible("description"));
        state.toggle_visibility("description");
        assert!(state.is_visible("description"));
    }

    fn keys(ids: std::ops::Range<usize>) -> HashSet<String> {
        ids.map(|i| i.to_string()).collect()
    }

    #[test]
    fn test_retain_selected() {
        let mut state = TableState::new(10, SelectionMode::Multi);
        state.set_rows_selected(["1", "2", "3"], true);
        state.retain_selected(|id| id != "2");
        assert!(state.is_selected("1"));
        assert!(!state.is_selected("2"));
        assert!(state.is_selected("3"));
    }

    #[test]
    fn test_shrinking_rows_clamp_page_and_prune_selection() {
        let mut state = TableState::new(10, SelectionMode::Multi);
        state.set_page_index(2, 25);
        state.set_rows_selected(["3", "20"], true);
        assert!(state.fits_rows(&keys(0..25), 25));

        let remaining = keys(0..5);
        assert!(!state.fits_rows(&remaining, 5));
        assert!(state.on_rows_replaced(&remaining, 5));
        assert_eq!(state.pagination.page_index, 0);
        assert!(state.is_selected("3"));
        assert!(!state.is_selected("20"));
        assert!(state.fits_rows(&remaining, 5));
    }

    #[test]
    fn test_rows_replaced_without_changes() {
        let mut state = TableState::new(10, SelectionMode::Single);
        state.set_page_index(1, 15);
        state.toggle_row("12", true);
        assert!(!state.on_rows_replaced(&keys(0..15), 15));
        assert_eq!(state.pagination.page_index, 1);
        assert!(state.is_selected("12"));
    }

    #[test]
    fn test_empty_rows_return_to_first_page() {
        let mut state = TableState::new(10, SelectionMode::Disabled);
        state.set_page_index(4, 50);
        assert!(state.on_rows_replaced(&HashSet::new(), 0));
        assert_eq!(state.pagination.page_index, 0);
    }
}
