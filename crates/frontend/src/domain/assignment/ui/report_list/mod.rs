mod columns;

pub use columns::{report_columns, SEARCH_COLUMN, SEARCH_PLACEHOLDER};

use contracts::domain::assignment::TechnicianAssignmentReportDto;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::assignment::api;
use crate::shared::api::{LoadState, RequestScope};
use crate::shared::components::data_table::{
    use_data_table, DataTable, DataTablePagination, DataTableToolbar, TableOptions,
};
use crate::shared::components::notice::{PageError, PageLoading};
use crate::shared::data_table::SelectionMode;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

const PAGE_SIZE: usize = 10;

/// Отчёт по назначениям техников (`/supervisor/tecnicos_table`)
#[component]
#[allow(non_snake_case)]
pub fn TechnicianReportList() -> impl IntoView {
    let state = RwSignal::new(LoadState::<Vec<TechnicianAssignmentReportDto>>::Idle);
    let scope = RequestScope::new();

    let load = move || {
        let ticket = scope.begin();
        state.set(LoadState::Loading);
        spawn_local(async move {
            let result = api::fetch_report(ticket.signal()).await;
            if !scope.is_current(ticket.id) {
                log::debug!("report response {} is stale, discarded", ticket.id);
                return;
            }
            scope.finish(ticket.id);
            if let Err(e) = &result {
                log::warn!("technician report fetch failed: {e}");
            }
            state.set(LoadState::from_result(result));
        });
    };
    load();

    let rows = Signal::derive(move || state.with(|s| s.data().cloned().unwrap_or_default()));
    let controller = use_data_table(
        rows,
        report_columns(),
        TableOptions {
            page_size: PAGE_SIZE,
            selection: SelectionMode::Disabled,
        },
    );

    view! {
        <PageFrame page_id="technician_report--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Reporte de Asignaciones por Técnico"</h1>
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
                    <PageLoading text="Cargando reporte de técnicos..." />
                </Show>
                {move || state.with(|s| s.error().map(|m| format!("Error al cargar el reporte: {m}"))).map(|message| view! {
                    <PageError message=message />
                })}
                <Show when=move || state.with(|s| s.data().is_some())>
                    <DataTableToolbar
                        controller=controller
                        search_column=SEARCH_COLUMN
                        search_placeholder=SEARCH_PLACEHOLDER
                    />
                    <DataTable controller=controller empty_text="No hay técnicos." />
                    <DataTablePagination controller=controller />
                </Show>
            </div>
        </PageFrame>
    }
}
