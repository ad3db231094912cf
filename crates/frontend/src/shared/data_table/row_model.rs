use super::column::ColumnDef;
use super::pagination::page_count;
use super::state::TableState;

/// Строка таблицы. Идентичность строки: собственный `id` записи; если его нет,
/// используется синтезированный индекс в исходном массиве.
pub trait TableRow {
    fn row_id(&self) -> Option<String> {
        None
    }
}

pub fn row_key<T: TableRow>(row: &T, index: usize) -> String {
    row.row_id().unwrap_or_else(|| index.to_string())
}

/// Производное представление: текущая страница после filter + sort + paginate
#[derive(Debug, Clone, PartialEq)]
pub struct RowModel<T> {
    /// (ключ строки, строка) текущей страницы
    pub rows: Vec<(String, T)>,
    pub filtered_count: usize,
    pub total_count: usize,
    pub page_count: usize,
}

impl<T> Default for RowModel<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            filtered_count: 0,
            total_count: 0,
            page_count: 0,
        }
    }
}

/// Индексы строк, прошедших все активные фильтры (логическое И)
pub fn filtered_indices<T>(rows: &[T], columns: &[ColumnDef<T>], state: &TableState) -> Vec<usize> {
    filtered_indices_except(rows, columns, state, None)
}

/// То же, но без фильтра колонки `skip` (для подсчёта фасетов)
pub(super) fn filtered_indices_except<T>(
    rows: &[T],
    columns: &[ColumnDef<T>],
    state: &TableState,
    skip: Option<&str>,
) -> Vec<usize> {
    let active: Vec<_> = state
        .filters
        .iter()
        .filter(|f| Some(f.id.as_str()) != skip)
        .filter_map(|f| {
            columns
                .iter()
                .find(|c| c.id == f.id && c.can_filter())
                .map(|c| (c, &f.value))
        })
        .collect();

    rows.iter()
        .enumerate()
        .filter(|(_, row)| {
            active
                .iter()
                .all(|(column, value)| value.matches(&column.value(row), column.meta.text_match))
        })
        .map(|(i, _)| i)
        .collect()
}

/// Стабильная сортировка индексов по активной колонке
fn sort_indices<T>(indices: &mut [usize], rows: &[T], columns: &[ColumnDef<T>], state: &TableState) {
    let Some(sort) = state.sorting.as_ref() else {
        return;
    };
    let Some(column) = columns.iter().find(|c| c.id == sort.id && c.can_sort()) else {
        return;
    };
    // slice::sort_by стабильна: равные ключи сохраняют исходный порядок
    indices.sort_by(|&a, &b| {
        let (va, vb) = (column.value(&rows[a]), column.value(&rows[b]));
        if va.is_empty() || vb.is_empty() {
            // пустые значения в конце при любом направлении
            va.compare(&vb)
        } else {
            sort.direction.apply(va.compare(&vb))
        }
    });
}

pub fn build_row_model<T: TableRow + Clone>(
    rows: &[T],
    columns: &[ColumnDef<T>],
    state: &TableState,
) -> RowModel<T> {
    let mut indices = filtered_indices(rows, columns, state);
    sort_indices(&mut indices, rows, columns, state);

    let filtered_count = indices.len();
    let range = state.pagination.range(filtered_count);
    let page = indices[range]
        .iter()
        .map(|&i| (row_key(&rows[i], i), rows[i].clone()))
        .collect();

    RowModel {
        rows: page,
        filtered_count,
        total_count: rows.len(),
        page_count: page_count(filtered_count, state.pagination.page_size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_table::column::CellValue;
    use crate::shared::data_table::filter::FilterValue;
    use crate::shared::data_table::selection::SelectionMode;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        name: &'static str,
        technician: Option<&'static str>,
        zone: &'static str,
    }

    impl TableRow for Row {
        fn row_id(&self) -> Option<String> {
            Some(self.id.to_string())
        }
    }

    fn columns() -> Vec<ColumnDef<Row>> {
        vec![
            ColumnDef::accessor("id", "ID", |r: &Row| CellValue::Number(r.id as f64)),
            ColumnDef::accessor("name", "Nombre", |r: &Row| CellValue::text(r.name)),
            ColumnDef::accessor("technicianName", "Técnico", |r: &Row| {
                CellValue::opt_text(r.technician)
            })
            .ignore_accents(),
            ColumnDef::accessor("zone", "Zona", |r: &Row| CellValue::text(r.zone)),
        ]
    }

    fn row(id: u32, name: &'static str, technician: Option<&'static str>, zone: &'static str) -> Row {
        Row { id, name, technician, zone }
    }

    fn ids(model: &RowModel<Row>) -> Vec<u32> {
        model.rows.iter().map(|(_, r)| r.id).collect()
    }

    #[test]
    fn test_filter_technician_substring_any_case() {
        let rows = vec![row(1, "A", None, "Norte"), row(2, "B", Some("Carlos"), "Sur")];
        let mut state = TableState::new(10, SelectionMode::Disabled);
        state.set_filter("technicianName", Some(FilterValue::text("CARLOS")));
        let model = build_row_model(&rows, &columns(), &state);
        assert_eq!(ids(&model), vec![2]);
    }

    #[test]
    fn test_filter_ignores_accents_for_technician() {
        let rows = vec![row(1, "A", Some("Ana Gómez"), "Sur"), row(2, "B", Some("Juan Pérez"), "Norte")];
        let mut state = TableState::default();
        state.set_filter("technicianName", Some(FilterValue::text("gomez")));
        assert_eq!(ids(&build_row_model(&rows, &columns(), &state)), vec![1]);
    }

    #[test]
    fn test_filters_are_conjunctive_and_reset_restores_all() {
        let rows = vec![
            row(1, "Fuga", Some("Ana"), "Norte"),
            row(2, "Fibra", Some("Ana"), "Sur"),
            row(3, "Fuga", Some("Luis"), "Norte"),
        ];
        let cols = columns();
        let mut state = TableState::default();
        state.set_filter("technicianName", Some(FilterValue::text("ana")));
        state.set_filter("zone", Some(FilterValue::values(["Norte"])));
        let model = build_row_model(&rows, &cols, &state);
        assert_eq!(ids(&model), vec![1]);
        assert_eq!(model.total_count, 3);

        state.reset_filters();
        assert_eq!(ids(&build_row_model(&rows, &cols, &state)), vec![1, 2, 3]);
    }

    #[test]
    fn test_sort_is_stable_through_toggle_cycle() {
        let rows = vec![
            row(1, "B", None, "Norte"),
            row(2, "A", None, "Sur"),
            row(3, "B", None, "Este"),
            row(4, "A", None, "Oeste"),
        ];
        let cols = columns();
        let mut state = TableState::default();

        state.toggle_sort("name");
        assert_eq!(ids(&build_row_model(&rows, &cols, &state)), vec![2, 4, 1, 3]);

        state.toggle_sort("name");
        assert_eq!(ids(&build_row_model(&rows, &cols, &state)), vec![1, 3, 2, 4]);

        state.toggle_sort("name");
        assert_eq!(state.sorting, None);
        assert_eq!(ids(&build_row_model(&rows, &cols, &state)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_empty_values_sort_last_in_both_directions() {
        let rows = vec![row(1, "A", None, "N"), row(2, "B", Some("Zoe"), "N"), row(3, "C", Some("Ana"), "N")];
        let cols = columns();
        let mut state = TableState::default();
        state.toggle_sort("technicianName");
        assert_eq!(ids(&build_row_model(&rows, &cols, &state)), vec![3, 2, 1]);
        state.toggle_sort("technicianName");
        assert_eq!(ids(&build_row_model(&rows, &cols, &state)), vec![2, 3, 1]);
    }

    #[test]
    fn test_pagination_of_filtered_set() {
        let rows: Vec<Row> = (1..=23).map(|i| row(i, "X", None, "Norte")).collect();
        let cols = columns();
        let mut state = TableState::new(10, SelectionMode::Disabled);
        let model = build_row_model(&rows, &cols, &state);
        assert_eq!(model.page_count, 3);
        assert_eq!(model.rows.len(), 10);

        state.set_page_index(2, model.filtered_count);
        let last = build_row_model(&rows, &cols, &state);
        assert_eq!(ids(&last), vec![21, 22, 23]);
    }

    #[test]
    fn test_row_key_falls_back_to_index() {
        #[derive(Clone)]
        struct Anonymous;
        impl TableRow for Anonymous {}
        assert_eq!(row_key(&Anonymous, 4), "4");
        assert_eq!(row_key(&row(9, "A", None, "N"), 0), "9");
    }
}
