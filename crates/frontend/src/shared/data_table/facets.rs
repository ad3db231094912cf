use std::collections::HashMap;

use super::column::{ColumnDef, FilterOption};
use super::row_model::filtered_indices_except;
use super::state::TableState;

/// Уникальные значения колонки в порядке первого появления, каждое один раз;
/// пустые значения пропускаются. Используется для динамических фасетов
/// (зоны, приоритеты), которые пересчитываются при каждой смене данных.
pub fn distinct_options<T>(rows: &[T], column: &ColumnDef<T>) -> Vec<FilterOption> {
    let mut seen = std::collections::HashSet::new();
    rows.iter()
        .map(|row| column.value(row))
        .filter(|value| !value.is_empty())
        .map(|value| value.display())
        .filter(|value| seen.insert(value.clone()))
        .map(FilterOption::plain)
        .collect()
}

/// Количество строк на каждое значение колонки с учётом всех остальных
/// активных фильтров (собственный фильтр колонки не учитывается).
pub fn faceted_counts<T>(
    rows: &[T],
    columns: &[ColumnDef<T>],
    state: &TableState,
    column_id: &str,
) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    let Some(column) = columns.iter().find(|c| c.id == column_id) else {
        return counts;
    };
    for index in filtered_indices_except(rows, columns, state, Some(column_id)) {
        let value = column.value(&rows[index]);
        if !value.is_empty() {
            *counts.entry(value.display()).or_insert(0) += 1;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_table::column::CellValue;
    use crate::shared::data_table::filter::FilterValue;

    #[derive(Clone)]
    struct Zone(&'static str, &'static str);

    fn columns() -> Vec<ColumnDef<Zone>> {
        vec![
            ColumnDef::accessor("zone", "Zona", |z: &Zone| CellValue::text(z.0)),
            ColumnDef::accessor("urgency", "Prioridad", |z: &Zone| CellValue::text(z.1)),
        ]
    }

    #[test]
    fn test_distinct_zone_options() {
        let rows = vec![Zone("Norte", "Alta"), Zone("Sur", "Baja"), Zone("Norte", "Alta")];
        let options = distinct_options(&rows, &columns()[0]);
        let values: Vec<_> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["Norte", "Sur"]);
        assert_eq!(options[0].label, "Norte");
    }

    #[test]
    fn test_distinct_skips_blank() {
        let rows = vec![Zone("", "Alta"), Zone("Este", "Alta")];
        assert_eq!(distinct_options(&rows, &columns()[0]).len(), 1);
    }

    #[test]
    fn test_counts_respect_other_filters_only() {
        let rows = vec![Zone("Norte", "Alta"), Zone("Sur", "Baja"), Zone("Norte", "Baja")];
        let cols = columns();
        let mut state = TableState::default();
        state.set_filter("zone", Some(FilterValue::values(["Sur"])));
        state.set_filter("urgency", Some(FilterValue::values(["Baja"])));

        let zone_counts = faceted_counts(&rows, &cols, &state, "zone");
        assert_eq!(zone_counts.get("Norte"), Some(&1));
        assert_eq!(zone_counts.get("Sur"), Some(&1));

        let urgency_counts = faceted_counts(&rows, &cols, &state, "urgency");
        assert_eq!(urgency_counts.get("Baja"), Some(&1));
        assert_eq!(urgency_counts.get("Alta"), None);
    }
}
