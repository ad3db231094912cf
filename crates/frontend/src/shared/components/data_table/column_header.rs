//! Компонент заголовка колонки с сортировкой
//!
//! # Примеры
//!
//! ```rust,ignore
//! <DataTableColumnHeader controller=table column_id="zoneName" title="Zona" sortable=true />
//! ```

use crate::shared::components::data_table::TableController;
use crate::shared::data_table::TableRow as RowIdentity;
use crate::shared::list_utils::{get_aria_sort, get_sort_class, get_sort_indicator};
use leptos::prelude::*;
use thaw::*;

/// Заголовок колонки. Клик по сортируемому заголовку переключает
/// сортировку по кругу: по возрастанию, по убыванию, без сортировки.
#[component]
pub fn DataTableColumnHeader<T>(
    controller: TableController<T>,
    column_id: &'static str,
    title: &'static str,
    #[prop(optional)] sortable: bool,
    /// Минимальная ширина колонки
    #[prop(optional, default = 100.0)]
    min_width: f64,
) -> impl IntoView
where
    T: RowIdentity + Clone + PartialEq + Send + Sync + 'static,
{
    if !sortable {
        return view! {
            <TableHeaderCell min_width=min_width>{title}</TableHeaderCell>
        }
        .into_any();
    }

    let direction = Signal::derive(move || controller.sort_direction(column_id));

    view! {
        <TableHeaderCell min_width=min_width>
            <div
                class="table__sortable-header"
                style="cursor: pointer; padding-right: 12px;"
                role="button"
                aria-sort=move || get_aria_sort(direction.get())
                on:click=move |_| controller.toggle_sort(column_id)
            >
                {title}
                <span class=move || get_sort_class(direction.get())>
                    {move || get_sort_indicator(direction.get())}
                </span>
            </div>
        </TableHeaderCell>
    }
    .into_any()
}
