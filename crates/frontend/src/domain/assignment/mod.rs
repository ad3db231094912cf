pub mod api;
pub mod ui;

use crate::shared::data_table::TableRow;
use contracts::domain::assignment::TechnicianAssignmentReportDto;

impl TableRow for TechnicianAssignmentReportDto {
    fn row_id(&self) -> Option<String> {
        Some(self.technician_id.to_string())
    }
}
