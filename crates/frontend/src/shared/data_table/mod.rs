//! Табличный движок: фильтрация, сортировка, пагинация, выбор строк и фасеты.
//!
//! Модуль не зависит от Leptos: вся логика чистая и покрыта юнит-тестами.
//! Реактивная обёртка живёт в `shared::components::data_table::controller`.
//!
//! Конвейер строк: `rows → filter (AND по колонкам) → stable sort → paginate`.
//! Фильтры, сортировка и пагинация применяются только к загруженному в память
//! массиву: серверной пагинации нет.

pub mod column;
pub mod facets;
pub mod filter;
pub mod pagination;
pub mod row_model;
pub mod selection;
pub mod sorting;
pub mod state;
pub mod text;

pub use column::{CellHint, CellValue, ColumnDef, ColumnMeta, FilterOption, FilterVariant, TextMatch};
pub use facets::{distinct_options, faceted_counts};
pub use filter::{ColumnFilter, FilterValue};
pub use pagination::{page_count, PaginationState};
pub use row_model::{build_row_model, filtered_indices, RowModel, TableRow};
pub use selection::SelectionMode;
pub use sorting::{ColumnSort, SortDirection};
pub use state::TableState;
