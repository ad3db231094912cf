use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;
use thaw::*;

use crate::routes::routes::{ROUTE_SUPERVISOR_REPORT, ROUTE_TECHNICIAN_ORDERS};
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;

/// Кнопка выхода скрыта на стартовой странице и на странице входа
pub fn shows_logout(pathname: &str) -> bool {
    !matches!(pathname.trim_end_matches('/'), "" | "/login")
}

#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();
    let location = use_location();
    let navigate = use_navigate();

    let show_logout = Signal::derive(move || location.pathname.with(|p| shows_logout(p)));

    let handle_logout = move |_| {
        let navigate = navigate.clone();
        spawn_local(async move {
            if session.logout().await.is_ok() {
                navigate("/", NavigateOptions::default());
            }
        });
    };

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <a href="/" class="header__brand">
                    <span class="header__logo">"◉"</span>
                    <span class="header__title">"TelcoNova"</span>
                </a>
                <Show when=move || show_logout.get()>
                    <nav class="header__nav">
                        <a href=ROUTE_TECHNICIAN_ORDERS class="header__nav-link">"Órdenes"</a>
                        <a href=ROUTE_SUPERVISOR_REPORT class="header__nav-link">"Técnicos"</a>
                    </nav>
                </Show>
            </div>
            <div class="header__actions">
                <Show when=move || show_logout.get()>
                    <Button
                        appearance=ButtonAppearance::Primary
                        class="button--danger"
                        on_click=handle_logout.clone()
                    >
                        {icon("log-out")}
                        " Cerrar sesión"
                    </Button>
                </Show>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logout_hidden_on_public_routes() {
        assert!(!shows_logout("/"));
        assert!(!shows_logout("/login"));
        assert!(!shows_logout("/login/"));
        assert!(shows_logout("/supervisor/tecnicos_table"));
        assert!(shows_logout("/tecnico/orden_details"));
    }
}
