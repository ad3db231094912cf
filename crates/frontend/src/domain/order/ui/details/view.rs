use contracts::domain::order::OrderDto;
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use super::status_updater::StatusUpdater;
use super::view_model::OrderDetailsVm;
use crate::domain::order::ui::list::urgency_badge_variant;
use crate::shared::components::notice::{PageError, PageLoading};
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::format_long_datetime_es;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;

/// Часы в человекочитаемом виде: целые без дробной части
fn format_hours(hours: f64) -> String {
    if hours.fract() == 0.0 {
        format!("{} horas", hours as i64)
    } else {
        format!("{hours} horas")
    }
}

fn format_workload(workload: f64) -> String {
    if workload.fract() == 0.0 {
        format!("{}", workload as i64)
    } else {
        workload.to_string()
    }
}

#[component]
fn Field(label: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="detail-field">
            <span class="detail-field__label">{label}</span>
            <span class="detail-field__value">{children()}</span>
        </div>
    }
}

/// Поля карточки заявки, вычисленные до построения view
#[derive(Debug, Clone, PartialEq)]
struct CardFields {
    title: String,
    requester: String,
    created: String,
    zone: String,
    urgency: String,
    urgency_variant: String,
    hours: String,
    workload: String,
    technician: String,
    specialty: String,
    status: &'static str,
    description: String,
}

impl CardFields {
    fn new(order: &OrderDto) -> Self {
        Self {
            title: format!("Orden #{} - {}", order.id, order.name),
            requester: order.requester.clone(),
            created: format_long_datetime_es(&order.timestamp),
            zone: order.zone_name.clone(),
            urgency: order.urgency.clone(),
            urgency_variant: urgency_badge_variant(&order.urgency).to_string(),
            hours: format_hours(order.estimated_time),
            workload: format_workload(order.workload),
            technician: order
                .assigned_technician()
                .map(str::to_string)
                .unwrap_or_else(|| "No asignado".to_string()),
            specialty: order
                .specialty_name
                .clone()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| "No especificada".to_string()),
            status: order.display_status().label(),
            description: order.description.clone(),
        }
    }
}

#[component]
fn OrderCard(order: OrderDto) -> impl IntoView {
    let CardFields {
        title,
        requester,
        created,
        zone,
        urgency,
        urgency_variant,
        hours,
        workload,
        technician,
        specialty,
        status,
        description,
    } = CardFields::new(&order);

    view! {
        <div class="detail-card">
            <h2 class="detail-card__title">{title}</h2>
            <div class="detail-card__grid">
                <Field label="Solicitante">{requester}</Field>
                <Field label="Fecha de Creación">{created}</Field>
                <Field label="Zona">{zone}</Field>
                <Field label="Prioridad">
                    <Badge variant=urgency_variant>{urgency}</Badge>
                </Field>
                <Field label="Tiempo Estimado">{hours}</Field>
                <Field label="Carga de Trabajo">{workload}</Field>
                <Field label="Técnico Asignado">{technician}</Field>
                <Field label="Especialidad Requerida">{specialty}</Field>
                <Field label="Estado">{status}</Field>
            </div>
            <div class="detail-card__section">
                <h3 class="detail-card__subtitle">"Descripción del Problema/Servicio"</h3>
                <p class="detail-card__text">{description}</p>
            </div>
        </div>
    }
}

/// Страница деталей заявки (`/tecnico/orden_details?ordenId=`)
#[component]
#[allow(non_snake_case)]
pub fn OrderDetails() -> impl IntoView {
    let query = use_query_map();
    let vm = OrderDetailsVm::new();

    Effect::new(move |_| {
        let raw_id = query.with(|q| q.get("ordenId"));
        vm.load(raw_id);
    });

    view! {
        <PageFrame page_id="order--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Detalles de la Orden"</h1>
                </div>
            </div>

            <div class="page__content">
                <Show when=move || vm.order.with(|o| o.is_loading())>
                    <PageLoading text="Cargando detalles de la orden..." />
                </Show>
                {move || vm.order.with(|o| o.error().map(str::to_string)).map(|message| view! {
                    <PageError message=message />
                })}
                {move || vm.order.with(|o| o.data().cloned()).map(|order| view! {
                    <OrderCard order=order />
                    <StatusUpdater vm=vm />
                })}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(2.0), "2 horas");
        assert_eq!(format_hours(1.5), "1.5 horas");
        assert_eq!(format_workload(3.0), "3");
    }

    #[test]
    fn test_card_fields_defaults() {
        let order = OrderDto {
            id: 7,
            name: "Cambio de medidor".to_string(),
            description: "Medidor dañado".to_string(),
            estimated_time: 2.0,
            workload: 1.5,
            urgency: "Baja".to_string(),
            zone_id: 1,
            zone_name: "Norte".to_string(),
            requester: "Marta".to_string(),
            timestamp: "2025-05-20T10:15:00".to_string(),
            technician_name: None,
            specialty_name: Some(" ".to_string()),
        };
        let fields = CardFields::new(&order);
        assert_eq!(fields.title, "Orden #7 - Cambio de medidor");
        assert_eq!(fields.hours, "2 horas");
        assert_eq!(fields.workload, "1.5");
        assert_eq!(fields.technician, "No asignado");
        assert_eq!(fields.specialty, "No especificada");
        assert_eq!(fields.status, "Nuevo");
        assert_eq!(fields.urgency_variant, "secondary");
    }
}
