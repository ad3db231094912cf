//! Компоненты таблицы данных: контроллер, таблица, тулбар, фильтры, пагинация

pub mod column_header;
pub mod controller;
pub mod faceted_filter;
pub mod pagination;
pub mod table;
pub mod toolbar;
pub mod view_options;

pub use column_header::DataTableColumnHeader;
pub use controller::{use_data_table, TableController, TableOptions};
pub use faceted_filter::DataTableFacetedFilter;
pub use pagination::DataTablePagination;
pub use table::DataTable;
pub use toolbar::DataTableToolbar;
pub use view_options::DataTableViewOptions;
