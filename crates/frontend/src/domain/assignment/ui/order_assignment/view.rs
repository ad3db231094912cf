use contracts::domain::order::OrderDto;
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use thaw::*;

use super::view_model::OrderAssignmentVm;
use crate::domain::assignment::ui::report_list::{
    report_columns, SEARCH_COLUMN, SEARCH_PLACEHOLDER,
};
use crate::domain::order::ui::list::urgency_badge_variant;
use crate::shared::components::data_table::{
    use_data_table, DataTable, DataTablePagination, DataTableToolbar, TableOptions,
};
use crate::shared::components::notice::{InlineNotice, PageError, PageLoading};
use crate::shared::components::ui::Badge;
use crate::shared::data_table::text::truncate_chars;
use crate::shared::data_table::SelectionMode;
use crate::shared::date_utils::format_datetime;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;

const PAGE_SIZE: usize = 10;

/// Готовые к выводу поля сводки заявки
#[derive(Debug, Clone, PartialEq)]
struct SummaryFields {
    title: String,
    name: String,
    description: String,
    description_short: String,
    created: String,
    zone: String,
    urgency: String,
    urgency_variant: String,
    technician: String,
    status: &'static str,
}

impl SummaryFields {
    fn new(order: &OrderDto) -> Self {
        Self {
            title: format!("Orden #{}", order.id),
            name: order.name.clone(),
            description: order.description.clone(),
            description_short: truncate_chars(&order.description, 120),
            created: format_datetime(&order.timestamp),
            zone: order.zone_name.clone(),
            urgency: order.urgency.clone(),
            urgency_variant: urgency_badge_variant(&order.urgency).to_string(),
            technician: order
                .assigned_technician()
                .map(str::to_string)
                .unwrap_or_else(|| "No asignado".to_string()),
            status: order.display_status().label(),
        }
    }
}

#[component]
fn OrderSummary(order: OrderDto) -> impl IntoView {
    let SummaryFields {
        title,
        name,
        description,
        description_short,
        created,
        zone,
        urgency,
        urgency_variant,
        technician,
        status,
    } = SummaryFields::new(&order);

    view! {
        <div class="detail-card">
            <h2 class="detail-card__title">{title}</h2>
            <p class="detail-card__hint">
                "Seleccione un técnico y haga clic en \"Asignar Técnico\" para proceder."
            </p>
            <div class="detail-card__grid">
                <div class="detail-field">
                    <span class="detail-field__label">"Nombre"</span>
                    <span class="detail-field__value">{name}</span>
                </div>
                <div class="detail-field">
                    <span class="detail-field__label">"Descripción"</span>
                    <span class="detail-field__value" title=description>
                        {description_short}
                    </span>
                </div>
                <div class="detail-field">
                    <span class="detail-field__label">"Fecha de Creación"</span>
                    <span class="detail-field__value">{created}</span>
                </div>
                <div class="detail-field">
                    <span class="detail-field__label">"Zona"</span>
                    <span class="detail-field__value">{zone}</span>
                </div>
                <div class="detail-field">
                    <span class="detail-field__label">"Prioridad"</span>
                    <span class="detail-field__value">
                        <Badge variant=urgency_variant>{urgency}</Badge>
                    </span>
                </div>
                <div class="detail-field">
                    <span class="detail-field__label">"Técnico Asignado"</span>
                    <span class="detail-field__value">{technician}</span>
                </div>
                <div class="detail-field">
                    <span class="detail-field__label">"Estado"</span>
                    <span class="detail-field__value">{status}</span>
                </div>
            </div>
        </div>
    }
}

/// Назначение техника (`/supervisor/orden_details?ordenId=`)
#[component]
#[allow(non_snake_case)]
pub fn OrderAssignmentPage() -> impl IntoView {
    let query = use_query_map();
    let vm = OrderAssignmentVm::new();

    Effect::new(move |_| {
        let raw_id = query.with(|q| q.get("ordenId"));
        vm.load(raw_id);
    });

    let rows = Signal::derive(move || vm.report.with(|s| s.data().cloned().unwrap_or_default()));
    let controller = use_data_table(
        rows,
        report_columns(),
        TableOptions {
            page_size: PAGE_SIZE,
            selection: SelectionMode::Single,
        },
    );
    let clear_selection = Callback::new(move |_| controller.reset_selection());

    let can_assign = vm.can_assign();
    let manual_disabled =
        Signal::derive(move || !can_assign.get() || controller.selected_count() != 1);
    let auto_disabled = Signal::derive(move || !can_assign.get());

    view! {
        <PageFrame page_id="order_assignment--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Resumen de Órden"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm.assign_manual(controller.selected_rows(), clear_selection)
                        disabled=manual_disabled
                    >
                        "Asignar Técnico"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| vm.assign_auto(clear_selection)
                        disabled=auto_disabled
                    >
                        "Asignación automática"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || vm.notice.get().map(|notice| view! {
                    <InlineNotice message=notice.message().to_string() kind=notice.kind() />
                })}

                <Show when=move || vm.order.with(|o| o.is_loading())>
                    <PageLoading text="Cargando detalles de la orden..." />
                </Show>
                {move || vm.order.with(|o| o.error().map(str::to_string)).map(|message| view! {
                    <PageError message=message />
                })}
                {move || vm.order.with(|o| o.data().cloned()).map(|order| view! {
                    <OrderSummary order=order />
                })}
                <Show when=move || vm.refreshing.get()>
                    <PageLoading text="Actualizando..." />
                </Show>

                <h2 class="page__subtitle">"Técnicos disponibles"</h2>
                <Show when=move || vm.report.with(|s| s.is_loading())>
                    <PageLoading text="Cargando reporte de técnicos..." />
                </Show>
                {move || vm.report.with(|s| s.error().map(|m| format!("Error al cargar el reporte: {m}"))).map(|message| view! {
                    <PageError message=message />
                })}
                <Show when=move || vm.report.with(|s| s.data().is_some())>
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
