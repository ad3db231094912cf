//! ViewModel страницы назначения.
//!
//! После назначения (ручного или автоматического) заявка и отчёт
//! перечитываются по очереди: сначала заявка, затем отчёт. Отказ 403
//! показывается отдельным уведомлением и тоже ведёт к обновлению.

use contracts::domain::assignment::{NewAssignmentDto, TechnicianAssignmentReportDto};
use contracts::domain::order::OrderDto;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::assignment::api as assignment_api;
use crate::domain::order::api as order_api;
use crate::domain::order::ui::details::order_id_param;
use crate::shared::api::{ApiError, LoadState, RequestScope};

pub const SELECT_ONE_TECHNICIAN: &str = "Seleccione exactamente un técnico.";

/// Уведомление о результате назначения
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignmentNotice {
    Success(String),
    /// Сервер отклонил операцию (403)
    Rejected(String),
    Failed(String),
}

impl AssignmentNotice {
    pub fn message(&self) -> &str {
        match self {
            AssignmentNotice::Success(m) | AssignmentNotice::Rejected(m) | AssignmentNotice::Failed(m) => m,
        }
    }

    /// Вид для `InlineNotice`
    pub fn kind(&self) -> &'static str {
        match self {
            AssignmentNotice::Success(_) => "success",
            AssignmentNotice::Rejected(_) => "warning",
            AssignmentNotice::Failed(_) => "error",
        }
    }
}

/// Итог операции назначения: уведомление и нужно ли обновлять данные
pub fn assignment_outcome(result: Result<String, ApiError>) -> (AssignmentNotice, bool) {
    match result {
        Ok(message) => (AssignmentNotice::Success(message), true),
        Err(e) if e.is_forbidden() => (
            AssignmentNotice::Rejected(format!("Asignación rechazada: {}", e.user_message())),
            true,
        ),
        Err(e) => (AssignmentNotice::Failed(e.user_message()), false),
    }
}

/// Тело ручного назначения: ровно один выбранный техник
pub fn manual_assignment(
    selected: &[TechnicianAssignmentReportDto],
    order: &OrderDto,
) -> Result<NewAssignmentDto, &'static str> {
    match selected {
        [technician] => Ok(NewAssignmentDto::manual(technician, order.id, order.name.clone())),
        _ => Err(SELECT_ONE_TECHNICIAN),
    }
}

#[derive(Clone, Copy)]
pub struct OrderAssignmentVm {
    pub order_id: RwSignal<Option<String>>,
    pub order: RwSignal<LoadState<OrderDto>>,
    pub report: RwSignal<LoadState<Vec<TechnicianAssignmentReportDto>>>,
    pub assigning: RwSignal<bool>,
    pub notice: RwSignal<Option<AssignmentNotice>>,
    /// Фоновое обновление после назначения
    pub refreshing: RwSignal<bool>,

    order_scope: RequestScope,
    report_scope: RequestScope,
}

impl OrderAssignmentVm {
    pub fn new() -> Self {
        Self {
            order_id: RwSignal::new(None),
            order: RwSignal::new(LoadState::Idle),
            report: RwSignal::new(LoadState::Idle),
            assigning: RwSignal::new(false),
            notice: RwSignal::new(None),
            refreshing: RwSignal::new(false),
            order_scope: RequestScope::new(),
            report_scope: RequestScope::new(),
        }
    }

    /// Первичная загрузка по сырому `ordenId`
    pub fn load(&self, raw_id: Option<String>) {
        let this = *self;
        this.notice.set(None);
        match order_id_param(raw_id) {
            Ok(id) => {
                this.order_id.set(Some(id));
                spawn_local(async move { this.refresh(true).await });
            }
            Err(e) => {
                // ответ по прежнему id не должен перезаписать ошибку
                this.order_scope.cancel();
                this.order_id.set(None);
                this.order.set(LoadState::Failed(e.user_message()));
                // таблица техников не зависит от заявки
                spawn_local(async move { this.fetch_report(true).await });
            }
        }
    }

    /// Заявка, затем отчёт
    async fn refresh(self, show_loading: bool) {
        self.fetch_order(show_loading).await;
        self.fetch_report(show_loading).await;
    }

    async fn fetch_order(self, show_loading: bool) {
        let Some(id) = self.order_id.try_get_untracked().flatten() else {
            return;
        };
        let ticket = self.order_scope.begin();
        if show_loading {
            self.order.set(LoadState::Loading);
        }
        let result = order_api::fetch_order(&id, ticket.signal()).await;
        if !self.order_scope.is_current(ticket.id) {
            log::debug!("order {id} response is stale, discarded");
            return;
        }
        self.order_scope.finish(ticket.id);
        if let Err(e) = &result {
            log::warn!("order {id} fetch failed: {e}");
        }
        self.order.set(LoadState::from_result(result));
    }

    async fn fetch_report(self, show_loading: bool) {
        let ticket = self.report_scope.begin();
        if show_loading {
            self.report.set(LoadState::Loading);
        }
        let result = assignment_api::fetch_report(ticket.signal()).await;
        if !self.report_scope.is_current(ticket.id) {
            log::debug!("report response {} is stale, discarded", ticket.id);
            return;
        }
        self.report_scope.finish(ticket.id);
        if let Err(e) = &result {
            log::warn!("technician report fetch failed: {e}");
        }
        self.report.set(LoadState::from_result(result));
    }

    pub fn can_assign(&self) -> Signal<bool> {
        let assigning = self.assigning;
        let order = self.order;
        Signal::derive(move || !assigning.get() && order.with(|o| o.data().is_some()))
    }

    /// Ручное назначение выбранного техника
    pub fn assign_manual(
        &self,
        selected: Vec<TechnicianAssignmentReportDto>,
        on_done: Callback<()>,
    ) {
        if self.assigning.get_untracked() {
            return;
        }
        let Some(order) = self.order.with_untracked(|o| o.data().cloned()) else {
            return;
        };
        let dto = match manual_assignment(&selected, &order) {
            Ok(dto) => dto,
            Err(message) => {
                self.notice.set(Some(AssignmentNotice::Failed(message.to_string())));
                return;
            }
        };

        let this = *self;
        this.assigning.set(true);
        this.notice.set(None);
        spawn_local(async move {
            let result = assignment_api::create_assignment(&dto).await.map(|created| {
                format!(
                    "Técnico {} asignado a la orden #{}.",
                    created.technician_name, created.order_id
                )
            });
            this.finish_assignment(result, on_done).await;
        });
    }

    /// Автоматическое назначение: сервер выбирает техника
    pub fn assign_auto(&self, on_done: Callback<()>) {
        if self.assigning.get_untracked() {
            return;
        }
        let Some(order_id) = self.order.with_untracked(|o| o.data().map(|o| o.id)) else {
            return;
        };

        let this = *self;
        this.assigning.set(true);
        this.notice.set(None);
        spawn_local(async move {
            let result = assignment_api::request_auto_assignment(order_id)
                .await
                .map(|()| format!("Asignación automática realizada para la orden #{order_id}."));
            this.finish_assignment(result, on_done).await;
        });
    }

    async fn finish_assignment(self, result: Result<String, ApiError>, on_done: Callback<()>) {
        if self.apply_outcome(result, on_done) {
            self.refresh(false).await;
            self.refreshing.try_set(false);
        }
        self.assigning.try_set(false);
    }

    /// Применяет результат назначения. Возвращает true, если нужно
    /// перечитать данные; false и при уже размонтированной странице.
    fn apply_outcome(&self, result: Result<String, ApiError>, on_done: Callback<()>) -> bool {
        if let Err(e) = &result {
            if e.is_forbidden() {
                log::warn!("assignment rejected: {e}");
            } else {
                log::error!("assignment failed: {e}");
            }
        }
        let (notice, refresh) = assignment_outcome(result);
        if self.notice.try_set(Some(notice)).is_some() {
            log::debug!("assignment finished after the page was left");
            return false;
        }
        if !refresh || on_done.try_run(()).is_none() {
            return false;
        }
        self.refreshing.try_set(true);
        true
    }
}

impl Default for OrderAssignmentVm {
    fn default() -> Self {
        Self::new()
    }
}
