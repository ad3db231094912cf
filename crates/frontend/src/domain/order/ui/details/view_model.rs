//! ViewModel страницы деталей заявки.
//!
//! Заявка грузится по `ordenId` из строки запроса; смена статуса отправляет
//! PUT и после успеха перечитывает заявку.

use contracts::domain::order::OrderDto;
use contracts::enums::WorkStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::order::api;
use crate::shared::api::{ApiError, LoadState, RequestScope};

pub const STATUS_UPDATED: &str = "Estado actualizado correctamente.";

/// Нормализует `ordenId`: пустое значение считается отсутствующим
pub fn order_id_param(raw: Option<String>) -> Result<String, ApiError> {
    raw.map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .ok_or(ApiError::MissingParameter("ordenId"))
}

#[derive(Clone, Copy)]
pub struct OrderDetailsVm {
    pub order_id: RwSignal<Option<String>>,
    pub order: RwSignal<LoadState<OrderDto>>,

    // Смена статуса
    pub selected_status: RwSignal<String>,
    pub updating: RwSignal<bool>,
    pub update_error: RwSignal<Option<String>>,
    pub update_success: RwSignal<Option<String>>,

    scope: RequestScope,
}

impl OrderDetailsVm {
    pub fn new() -> Self {
        Self {
            order_id: RwSignal::new(None),
            order: RwSignal::new(LoadState::Idle),
            selected_status: RwSignal::new(WorkStatus::default().code().to_string()),
            updating: RwSignal::new(false),
            update_error: RwSignal::new(None),
            update_success: RwSignal::new(None),
            scope: RequestScope::new(),
        }
    }

    /// Загрузка заявки по сырому значению `ordenId`
    pub fn load(&self, raw_id: Option<String>) {
        let id = match order_id_param(raw_id) {
            Ok(id) => id,
            Err(e) => {
                self.scope.cancel();
                self.order_id.set(None);
                self.order.set(LoadState::Failed(e.user_message()));
                return;
            }
        };
        self.order_id.set(Some(id.clone()));
        self.fetch(id, true);
    }

    /// Перечитать текущую заявку; карточка остаётся на экране до ответа
    pub fn reload(&self) {
        if let Some(id) = self.order_id.try_get_untracked().flatten() {
            self.fetch(id, false);
        }
    }

    fn fetch(&self, id: String, show_loading: bool) {
        let scope = self.scope;
        let order = self.order;
        let ticket = scope.begin();
        if show_loading {
            order.set(LoadState::Loading);
        }
        spawn_local(async move {
            let result = api::fetch_order(&id, ticket.signal()).await;
            if !scope.is_current(ticket.id) {
                log::debug!("order {id} response is stale, discarded");
                return;
            }
            scope.finish(ticket.id);
            if let Err(e) = &result {
                log::warn!("order {id} fetch failed: {e}");
            }
            order.set(LoadState::from_result(result));
        });
    }

    pub fn is_update_disabled(&self) -> Signal<bool> {
        let updating = self.updating;
        let order = self.order;
        Signal::derive(move || updating.get() || order.with(|o| o.data().is_none()))
    }

    /// Отправка выбранного статуса
    pub fn change_status(&self) {
        if self.updating.get_untracked() {
            return;
        }
        let Some(order_id) = self.order.with_untracked(|o| o.data().map(|o| o.id)) else {
            return;
        };
        let code = self.selected_status.get_untracked();
        let Some(status) = WorkStatus::from_code(&code) else {
            self.update_error.set(Some("Seleccione un estado válido.".to_string()));
            return;
        };

        let this = *self;
        this.updating.set(true);
        this.update_error.set(None);
        this.update_success.set(None);
        spawn_local(async move {
            match api::update_order_status(order_id, status).await {
                Ok(()) => {
                    this.update_success.try_set(Some(STATUS_UPDATED.to_string()));
                    this.reload();
                }
                Err(e) => {
                    log::error!("status update for order {order_id} failed: {e}");
                    this.update_error.try_set(Some(e.user_message()));
                }
            }
            this.updating.try_set(false);
        });
    }
}

impl Default for OrderDetailsVm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id_param() {
        assert_eq!(order_id_param(Some(" 42 ".into())), Ok("42".to_string()));
        assert_eq!(
            order_id_param(Some("   ".into())),
            Err(ApiError::MissingParameter("ordenId"))
        );
        let missing = order_id_param(None).unwrap_err();
        assert_eq!(missing.user_message(), "No se proporcionó un ID de orden.");
    }

    #[test]
    fn test_missing_id_replaces_previous_order() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = OrderDetailsVm::new();
            vm.order_id.set(Some("7".into()));
            vm.load(Some(" ".into()));
            assert_eq!(vm.order_id.get_untracked(), None);
            assert_eq!(
                vm.order.get_untracked(),
                LoadState::Failed("No se proporcionó un ID de orden.".into())
            );
        });
    }
}
