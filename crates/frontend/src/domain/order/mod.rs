pub mod api;
pub mod ui;

use crate::shared::data_table::TableRow;
use contracts::domain::order::OrderDto;

impl TableRow for OrderDto {
    fn row_id(&self) -> Option<String> {
        Some(self.id.to_string())
    }
}
