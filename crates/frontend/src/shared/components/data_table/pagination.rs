use crate::shared::components::data_table::TableController;
use crate::shared::data_table::TableRow as RowIdentity;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Варианты размера страницы
pub const PAGE_SIZE_OPTIONS: [usize; 5] = [10, 20, 30, 40, 50];

/// Пагинация: счётчик выбранных строк, размер страницы, навигация.
#[component]
pub fn DataTablePagination<T>(
    controller: TableController<T>,
    /// Available page size options (optional, defaults to [10, 20, 30, 40, 50])
    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,
) -> impl IntoView
where
    T: RowIdentity + Clone + PartialEq + Send + Sync + 'static,
{
    let page_size_opts = page_size_options.unwrap_or_else(|| PAGE_SIZE_OPTIONS.to_vec());
    let selectable = controller.selection_mode().is_enabled();

    let current_page = Signal::derive(move || controller.page_index());
    let total_pages = Signal::derive(move || controller.page_count());
    let page_size = Signal::derive(move || controller.page_size());
    let at_start = move || controller.state.with(|s| !s.pagination.can_previous());
    let at_end = move || {
        let total = controller.filtered_count();
        controller.state.with(|s| !s.pagination.can_next(total))
    };

    view! {
        <div class="pagination-controls">
            <div class="pagination-info">
                {move || if selectable {
                    format!(
                        "{} de {} fila(s) seleccionada(s).",
                        controller.selected_count(),
                        controller.filtered_count()
                    )
                } else {
                    format!("{} fila(s).", controller.filtered_count())
                }}
            </div>
            <label class="pagination-size">
                "Filas por página"
                <select
                    class="page-size-select"
                    on:change=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse() {
                            controller.set_page_size(size);
                        }
                    }
                    prop:value=move || page_size.get().to_string()
                >
                    {page_size_opts.iter().map(|&size| {
                        view! {
                            <option value={size.to_string()} selected=move || page_size.get() == size>
                                {size.to_string()}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </label>
            <span class="pagination-info">
                {move || format!("Página {} de {}", current_page.get() + 1, total_pages.get().max(1))}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| controller.set_page_index(0)
                disabled=at_start
                title="Primera página"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 0 {
                        controller.set_page_index(page - 1);
                    }
                }
                disabled=at_start
                title="Página anterior"
            >
                {icon("chevron-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| controller.set_page_index(current_page.get() + 1)
                disabled=at_end
                title="Página siguiente"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| controller.set_page_index(total_pages.get().saturating_sub(1))
                disabled=at_end
                title="Última página"
            >
                {icon("chevrons-right")}
            </button>
        </div>
    }
}
