//! Реактивный контроллер таблицы поверх чистого `TableState`.
//!
//! Страница передаёт сигнал строк и список колонок и получает Copy-хэндл:
//! мемо текущей страницы плюс мутаторы для всех элементов управления.

use std::collections::{HashMap, HashSet};

use leptos::prelude::*;

use crate::shared::data_table::row_model::row_key;
use crate::shared::data_table::{
    build_row_model, distinct_options, faceted_counts, filtered_indices, ColumnDef, FilterOption,
    FilterValue, RowModel, SelectionMode, SortDirection, TableRow, TableState,
};

/// Параметры таблицы при создании контроллера
#[derive(Debug, Clone, Copy)]
pub struct TableOptions {
    pub page_size: usize,
    pub selection: SelectionMode,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            page_size: crate::shared::data_table::pagination::DEFAULT_PAGE_SIZE,
            selection: SelectionMode::Disabled,
        }
    }
}

pub struct TableController<T: Send + Sync + 'static> {
    pub rows: Signal<Vec<T>>,
    pub columns: StoredValue<Vec<ColumnDef<T>>>,
    pub state: RwSignal<TableState>,
    pub model: Memo<RowModel<T>>,
}

impl<T: Send + Sync + 'static> Clone for TableController<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for TableController<T> {}

/// Создаёт контроллер. При каждой замене массива строк индекс страницы
/// ограничивается последней существующей страницей, а из выбора удаляются
/// строки, которых больше нет.
pub fn use_data_table<T>(
    rows: Signal<Vec<T>>,
    columns: Vec<ColumnDef<T>>,
    options: TableOptions,
) -> TableController<T>
where
    T: TableRow + Clone + PartialEq + Send + Sync + 'static,
{
    let columns = StoredValue::new(columns);
    let state = RwSignal::new(TableState::new(options.page_size, options.selection));

    let model = Memo::new(move |_| {
        rows.with(|rows| {
            columns.with_value(|columns| state.with(|state| build_row_model(rows, columns, state)))
        })
    });

    Effect::new(move |_| {
        let (keys, filtered) = rows.with(|rows| {
            let keys: HashSet<String> = rows
                .iter()
                .enumerate()
                .map(|(i, row)| row_key(row, i))
                .collect();
            let filtered = columns.with_value(|columns| {
                state.with_untracked(|state| filtered_indices(rows, columns, state).len())
            });
            (keys, filtered)
        });

        if !state.with_untracked(|s| s.fits_rows(&keys, filtered)) {
            log::debug!("table: rows replaced, clamping page and pruning selection");
            state.update(|s| {
                s.on_rows_replaced(&keys, filtered);
            });
        }
    });

    TableController {
        rows,
        columns,
        state,
        model,
    }
}

impl<T> TableController<T>
where
    T: TableRow + Clone + PartialEq + Send + Sync + 'static,
{
    pub fn column(&self, id: &str) -> Option<ColumnDef<T>> {
        self.columns
            .with_value(|c| c.iter().find(|c| c.id == id).cloned())
    }

    pub fn visible_columns(&self) -> Vec<ColumnDef<T>> {
        let columns = self.columns.get_value();
        self.state.with(|s| {
            columns
                .into_iter()
                .filter(|c| s.is_visible(c.id))
                .collect()
        })
    }

    pub fn selection_mode(&self) -> SelectionMode {
        self.state.with_untracked(|s| s.selection_mode)
    }

    // ── Фильтры ──────────────────────────────────────────────────────────

    pub fn filter_value(&self, column_id: &str) -> Option<FilterValue> {
        self.state.with(|s| s.filter_value(column_id).cloned())
    }

    pub fn filter_text(&self, column_id: &str) -> String {
        self.state.with(|s| {
            s.filter_value(column_id)
                .and_then(|v| v.as_text())
                .unwrap_or_default()
                .to_string()
        })
    }

    pub fn set_filter(&self, column_id: &str, value: Option<FilterValue>) {
        self.state.update(|s| s.set_filter(column_id, value));
    }

    pub fn set_filter_text(&self, column_id: &str, text: String) {
        self.set_filter(column_id, Some(FilterValue::Text(text)));
    }

    pub fn toggle_filter_value(&self, column_id: &str, value: &str, single: bool) {
        self.state
            .update(|s| s.toggle_filter_value(column_id, value, single));
    }

    pub fn is_filtered(&self) -> bool {
        self.state.with(|s| s.is_filtered())
    }

    pub fn reset_filters(&self) {
        self.state.update(|s| s.reset_filters());
    }

    /// Пункты фасетного фильтра со счётчиками. Если у колонки нет
    /// статического перечня, он строится из загруженных строк.
    pub fn facet_options(&self, column_id: &str) -> Vec<FilterOption> {
        let Some(column) = self.column(column_id) else {
            return Vec::new();
        };
        self.rows.with(|rows| {
            let counts: HashMap<String, usize> = self.columns.with_value(|columns| {
                self.state
                    .with(|state| faceted_counts(rows, columns, state, column_id))
            });
            let options = if column.meta.options.is_empty() {
                distinct_options(rows, &column)
            } else {
                column.meta.options.clone()
            };
            options
                .into_iter()
                .map(|mut option| {
                    option.count = Some(counts.get(&option.value).copied().unwrap_or(0));
                    option
                })
                .collect()
        })
    }

    // ── Сортировка ───────────────────────────────────────────────────────

    pub fn sort_direction(&self, column_id: &str) -> Option<SortDirection> {
        self.state.with(|s| s.sort_direction(column_id))
    }

    pub fn toggle_sort(&self, column_id: &str) {
        self.state.update(|s| s.toggle_sort(column_id));
    }

    // ── Видимость ────────────────────────────────────────────────────────

    pub fn is_visible(&self, column_id: &str) -> bool {
        self.state.with(|s| s.is_visible(column_id))
    }

    pub fn toggle_visibility(&self, column_id: &str) {
        self.state.update(|s| s.toggle_visibility(column_id));
    }

    // ── Выбор строк ──────────────────────────────────────────────────────

    pub fn is_selected(&self, row_id: &str) -> bool {
        self.state.with(|s| s.is_selected(row_id))
    }

    pub fn toggle_row(&self, row_id: &str, value: bool) {
        self.state.update(|s| s.toggle_row(row_id, value));
    }

    /// Выбрать/снять все строки текущей страницы
    pub fn set_page_selected(&self, value: bool) {
        let ids: Vec<String> = self
            .model
            .with_untracked(|m| m.rows.iter().map(|(id, _)| id.clone()).collect());
        self.state
            .update(|s| s.set_rows_selected(ids.iter().map(String::as_str), value));
    }

    pub fn reset_selection(&self) {
        self.state.update(|s| s.reset_selection());
    }

    pub fn selected_count(&self) -> usize {
        self.state.with(|s| s.selected.len())
    }

    /// Выбранные строки в исходном порядке (по всему набору, не только странице)
    pub fn selected_rows(&self) -> Vec<T> {
        self.state.with(|s| {
            self.rows.with(|rows| {
                rows.iter()
                    .enumerate()
                    .filter(|(i, row)| s.is_selected(&row_key(*row, *i)))
                    .map(|(_, row)| row.clone())
                    .collect()
            })
        })
    }

    // ── Пагинация ────────────────────────────────────────────────────────

    pub fn page_index(&self) -> usize {
        self.state.with(|s| s.pagination.page_index)
    }

    pub fn page_size(&self) -> usize {
        self.state.with(|s| s.pagination.page_size)
    }

    pub fn page_count(&self) -> usize {
        self.model.with(|m| m.page_count)
    }

    pub fn filtered_count(&self) -> usize {
        self.model.with(|m| m.filtered_count)
    }

    pub fn set_page_index(&self, page_index: usize) {
        let filtered = self.model.with_untracked(|m| m.filtered_count);
        self.state
            .update(|s| s.set_page_index(page_index, filtered));
    }

    pub fn set_page_size(&self, page_size: usize) {
        self.state.update(|s| s.set_page_size(page_size));
    }
}
