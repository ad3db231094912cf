use contracts::system::auth::LoginRequest;
use leptos::prelude::*;

use super::api;
use crate::routes::routes::ROUTE_SUPERVISOR_REPORT;
use crate::shared::api::ApiError;

/// Маршрут после успешного входа
pub const HOME_AFTER_LOGIN: &str = ROUTE_SUPERVISOR_REPORT;

/// Сессия пользователя. Создаётся в корне приложения и передаётся через контекст;
/// сама сессия хранится сервером в cookie.
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// true после успешного входа в этой вкладке
    pub signed_in: RwSignal<bool>,
    pub pending: RwSignal<bool>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            signed_in: RwSignal::new(false),
            pending: RwSignal::new(false),
        }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<(), ApiError> {
        self.pending.set(true);
        let result = api::login(&request).await;
        self.pending.set(false);
        match &result {
            Ok(()) => {
                log::info!("login ok: {}", request.email);
                self.signed_in.set(true);
            }
            Err(e) => log::warn!("login failed: {}", e),
        }
        result
    }

    /// Сессия на клиенте сбрасывается только при успешном ответе сервера
    pub async fn logout(&self) -> Result<(), ApiError> {
        let result = api::logout().await;
        match &result {
            Ok(()) => {
                log::info!("logout ok");
                self.signed_in.set(false);
            }
            Err(e) => log::error!("Error al cerrar sesión: {}", e),
        }
        result
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide the session to the component tree
pub fn provide_session() -> SessionContext {
    let session = SessionContext::new();
    provide_context(session);
    session
}

/// Hook to access the session
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext not provided at the app root")
}
