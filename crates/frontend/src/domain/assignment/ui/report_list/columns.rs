use contracts::domain::assignment::TechnicianAssignmentReportDto;

use crate::shared::data_table::{CellHint, CellValue, ColumnDef, FilterVariant};

type Report = TechnicianAssignmentReportDto;

pub const SEARCH_COLUMN: &str = "technicianName";
pub const SEARCH_PLACEHOLDER: &str = "Búsqueda por nombre de técnico...";

pub fn report_columns() -> Vec<ColumnDef<Report>> {
    vec![
        ColumnDef::accessor("technicianId", "ID Técnico", |r: &Report| {
            CellValue::Number(r.technician_id as f64)
        }),
        ColumnDef::accessor(SEARCH_COLUMN, "Nombre Técnico", |r: &Report| {
            CellValue::text(r.technician_name.clone())
        })
        .filter(FilterVariant::Text)
        .placeholder(SEARCH_PLACEHOLDER)
        .ignore_accents(),
        ColumnDef::accessor("specialty", "Especialidad", |r: &Report| {
            CellValue::text(r.specialty.clone())
        })
        .filter(FilterVariant::MultiSelect),
        ColumnDef::accessor("zone", "Zona", |r: &Report| CellValue::text(r.zone.clone()))
            .filter(FilterVariant::MultiSelect),
        ColumnDef::accessor("totalAssignments", "Órdenes Asignadas", |r: &Report| {
            CellValue::Number(r.total_assignments as f64)
        })
        .cell(CellHint::Centered),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_table::{
        build_row_model, distinct_options, FilterValue, SelectionMode, TableState,
    };

    fn tech(id: i64, name: &str, specialty: &str, zone: &str, total: i64) -> Report {
        Report {
            technician_id: id,
            technician_name: name.to_string(),
            specialty: specialty.to_string(),
            zone: zone.to_string(),
            total_assignments: total,
        }
    }

    fn sample() -> Vec<Report> {
        vec![
            tech(1, "Juan Pérez", "Electricidad", "Norte", 5),
            tech(2, "Ana Gómez", "Plomería", "Sur", 3),
            tech(3, "José Núñez", "Electricidad", "Sur", 8),
        ]
    }

    #[test]
    fn test_specialty_options_come_from_rows() {
        let columns = report_columns();
        let specialty = columns.iter().find(|c| c.id == "specialty").unwrap();
        let values: Vec<String> = distinct_options(&sample(), specialty)
            .into_iter()
            .map(|o| o.value)
            .collect();
        assert_eq!(values, vec!["Electricidad", "Plomería"]);
    }

    #[test]
    fn test_sort_by_total_descending() {
        let columns = report_columns();
        let mut state = TableState::new(10, SelectionMode::Single);
        state.toggle_sort("totalAssignments");
        state.toggle_sort("totalAssignments");

        let model = build_row_model(&sample(), &columns, &state);
        let ids: Vec<&str> = model.rows.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_name_search_without_accents() {
        let columns = report_columns();
        let mut state = TableState::new(10, SelectionMode::Single);
        state.set_filter(SEARCH_COLUMN, Some(FilterValue::text("nunez")));

        let model = build_row_model(&sample(), &columns, &state);
        assert_eq!(model.filtered_count, 1);
        assert_eq!(model.rows[0].1.technician_name, "José Núñez");
    }
}
