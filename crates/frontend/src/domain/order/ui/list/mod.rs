mod columns;

pub use columns::{order_columns, urgency_badge_variant};

use contracts::domain::order::OrderDto;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::order::api;
use crate::routes::routes::{order_link, ROUTE_SUPERVISOR_ORDER_DETAILS, ROUTE_TECHNICIAN_ORDER_DETAILS};
use crate::shared::api::{LoadState, RequestScope};
use crate::shared::components::data_table::{
    use_data_table, DataTable, DataTablePagination, DataTableToolbar, TableOptions,
};
use crate::shared::components::notice::{PageError, PageLoading};
use crate::shared::data_table::{SelectionMode, TableRow};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

const PAGE_SIZE: usize = 10;

/// Ссылки в колонке "Acciones"
fn render_actions(column_id: &'static str, order: OrderDto) -> AnyView {
    if column_id != "actions" {
        return view! { <></> }.into_any();
    }
    let id = order.row_id().unwrap_or_default();
    view! {
        <div class="table-actions">
            <a class="table-actions__link" href=order_link(ROUTE_TECHNICIAN_ORDER_DETAILS, &id)>
                "Ver Detalles"
            </a>
            <a class="table-actions__link" href=order_link(ROUTE_SUPERVISOR_ORDER_DETAILS, &id)>
                "Asignar"
            </a>
        </div>
    }
    .into_any()
}

#[component]
#[allow(non_snake_case)]
pub fn OrderList() -> impl IntoView {
    let state = RwSignal::new(LoadState::<Vec<OrderDto>>::Idle);
    let scope = RequestScope::new();

    let load = move || {
        let ticket = scope.begin();
        state.set(LoadState::Loading);
        spawn_local(async move {
            let result = api::fetch_orders(ticket.signal()).await;
            if !scope.is_current(ticket.id) {
                log::debug!("orders response {} is stale, discarded", ticket.id);
                return;
            }
            scope.finish(ticket.id);
            if let Err(e) = &result {
                log::warn!("orders fetch failed: {e}");
            }
            state.set(LoadState::from_result(result));
        });
    };
    load();

    let rows = Signal::derive(move || state.with(|s| s.data().cloned().unwrap_or_default()));
    let controller = use_data_table(
        rows,
        order_columns(),
        TableOptions {
            page_size: PAGE_SIZE,
            selection: SelectionMode::Disabled,
        },
    );
    let render_display = Callback::new(move |(column_id, order): (&'static str, OrderDto)| {
        render_actions(column_id, order)
    });

    view! {
        <PageFrame page_id="order--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Lista de Órdenes Asignadas"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load()
                        disabled=Signal::derive(move || state.with(|s| s.is_loading()))
                    >
                        {icon("refresh")}
                        " Actualizar"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <Show when=move || state.with(|s| s.is_loading())>
                    <PageLoading text="Cargando órdenes..." />
                </Show>
                {move || state.with(|s| s.error().map(|m| format!("Error al cargar órdenes: {m}"))).map(|message| view! {
                    <PageError message=message />
                })}
                <Show when=move || state.with(|s| s.data().is_some())>
                    <DataTableToolbar
                        controller=controller
                        search_column="technicianName"
                        search_placeholder="Búsqueda por técnico..."
                    />
                    <DataTable
                        controller=controller
                        render_display=render_display
                        empty_text="No hay órdenes."
                    />
                    <DataTablePagination controller=controller />
                </Show>
            </div>
        </PageFrame>
    }
}
