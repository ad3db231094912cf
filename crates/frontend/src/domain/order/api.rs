use contracts::domain::order::{OrderDto, UpdateOrderStatusRequest};
use contracts::enums::WorkStatus;
use contracts::shared::hal::OrderCollection;
use web_sys::AbortSignal;

use crate::shared::api::{get_json, put_json, ApiError};

/// Все заявки (`GET /api/orders/all`)
pub async fn fetch_orders(signal: Option<&AbortSignal>) -> Result<Vec<OrderDto>, ApiError> {
    let collection: OrderCollection = get_json("/api/orders/all", signal).await?;
    let items = collection.into_items();
    log::debug!("orders loaded: {}", items.len());
    Ok(items)
}

/// Одна заявка по id
pub async fn fetch_order(id: &str, signal: Option<&AbortSignal>) -> Result<OrderDto, ApiError> {
    get_json(&format!("/api/orders/{}", urlencoding::encode(id)), signal).await
}

pub async fn update_order_status(id: i64, status: WorkStatus) -> Result<(), ApiError> {
    let body = UpdateOrderStatusRequest { status };
    put_json(&format!("/api/orders/{id}/status"), &body).await?;
    log::info!("order {id} status set to {}", status.code());
    Ok(())
}
