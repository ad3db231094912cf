use contracts::domain::order::{OrderDisplayStatus, OrderDto};
use contracts::enums::UrgencyLevel;

use crate::shared::data_table::{CellHint, CellValue, ColumnDef, FilterOption, FilterVariant};

/// Длина описания в ячейке таблицы
pub const DESCRIPTION_MAX_CHARS: usize = 50;

/// Вариант бейджа приоритета: Alta красный, Media основной, прочее вторичный
pub fn urgency_badge_variant(label: &str) -> &'static str {
    match UrgencyLevel::from_label(label) {
        Some(UrgencyLevel::Alta) => "destructive",
        Some(UrgencyLevel::Media) => "default",
        _ => "secondary",
    }
}

pub fn status_badge_variant(label: &str) -> &'static str {
    if label == OrderDisplayStatus::Asignado.label() {
        "info"
    } else {
        "outline"
    }
}

pub fn order_columns() -> Vec<ColumnDef<OrderDto>> {
    vec![
        ColumnDef::accessor("id", "Orden ID", |o: &OrderDto| CellValue::Number(o.id as f64)),
        ColumnDef::accessor("name", "Nombre Orden", |o: &OrderDto| CellValue::text(o.name.clone())),
        ColumnDef::accessor("description", "Descripción", |o: &OrderDto| {
            CellValue::text(o.description.clone())
        })
        .cell(CellHint::Truncate(DESCRIPTION_MAX_CHARS))
        .sortable(false),
        ColumnDef::accessor("technicianName", "Técnico", |o: &OrderDto| {
            CellValue::opt_text(o.assigned_technician())
        })
        .cell(CellHint::OrPlaceholder("No asignado"))
        .filter(FilterVariant::Text)
        .placeholder("Búsqueda por técnico...")
        .ignore_accents(),
        ColumnDef::accessor("status", "Estado", |o: &OrderDto| {
            CellValue::text(o.display_status().label())
        })
        .cell(CellHint::Badge(status_badge_variant))
        .filter(FilterVariant::MultiSelect)
        .options(vec![
            FilterOption::plain(OrderDisplayStatus::Nuevo.label()),
            FilterOption::plain(OrderDisplayStatus::Asignado.label()),
        ]),
        // перечни приоритетов и зон строятся из загруженных строк
        ColumnDef::accessor("urgency", "Prioridad", |o: &OrderDto| CellValue::text(o.urgency.clone()))
            .cell(CellHint::Badge(urgency_badge_variant))
            .filter(FilterVariant::MultiSelect),
        ColumnDef::accessor("zoneName", "Zona", |o: &OrderDto| CellValue::text(o.zone_name.clone()))
            .filter(FilterVariant::MultiSelect),
        ColumnDef::display("actions", "Acciones"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_table::{build_row_model, FilterValue, SelectionMode, TableState};

    fn order(id: i64, urgency: &str, zone: &str, technician: Option<&str>) -> OrderDto {
        OrderDto {
            id,
            name: format!("Orden {id}"),
            description: "x".repeat(60),
            estimated_time: 2.0,
            workload: 1.0,
            urgency: urgency.to_string(),
            zone_id: 1,
            zone_name: zone.to_string(),
            requester: "Marta Ruiz".to_string(),
            timestamp: "2025-05-20T10:15:00".to_string(),
            technician_name: technician.map(str::to_string),
            specialty_name: None,
        }
    }

    #[test]
    fn test_urgency_badge_variant() {
        assert_eq!(urgency_badge_variant("Alta"), "destructive");
        assert_eq!(urgency_badge_variant("Media"), "default");
        assert_eq!(urgency_badge_variant("Baja"), "secondary");
        assert_eq!(urgency_badge_variant("Urgente"), "secondary");
    }

    #[test]
    fn test_technician_search_ignores_accents() {
        let rows = vec![
            order(1, "Alta", "Norte", Some("Ana Gómez")),
            order(2, "Baja", "Sur", Some("Carlos López")),
            order(3, "Media", "Sur", None),
        ];
        let columns = order_columns();
        let mut state = TableState::new(10, SelectionMode::Disabled);
        state.set_filter("technicianName", Some(FilterValue::text("gomez")));

        let model = build_row_model(&rows, &columns, &state);
        let ids: Vec<i64> = model.rows.iter().map(|(_, o)| o.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_status_and_zone_filters_combine() {
        let rows = vec![
            order(1, "Alta", "Norte", Some("Ana Gómez")),
            order(2, "Baja", "Sur", None),
            order(3, "Media", "Sur", Some("Carlos López")),
        ];
        let columns = order_columns();
        let mut state = TableState::new(10, SelectionMode::Disabled);
        state.set_filter("zoneName", Some(FilterValue::values(["Sur"])));
        state.set_filter("status", Some(FilterValue::values(["Nuevo"])));

        let model = build_row_model(&rows, &columns, &state);
        assert_eq!(model.filtered_count, 1);
        assert_eq!(model.rows[0].0, "2");
    }

    #[test]
    fn test_actions_column_is_not_data() {
        let columns = order_columns();
        let actions = columns.iter().find(|c| c.id == "actions").unwrap();
        assert!(!actions.can_sort());
        assert!(!actions.can_filter());
        assert!(!actions.enable_hiding);
    }
}
