use crate::routes::routes::AppRoutes;
use crate::system::auth::context::provide_session;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Сессия (cookie) доступна всем страницам через контекст
    provide_session();

    view! {
        <AppRoutes />
    }
}
