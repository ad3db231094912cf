use leptos::prelude::*;

use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <PageFrame page_id="landing--system" category=PAGE_CAT_SYSTEM class="landing">
            <h1 class="landing__title">"Bienvenido a TelcoNova"</h1>
            <div class="landing__actions">
                <a href="/login" class="landing__button">"Iniciar Sesión"</a>
            </div>
        </PageFrame>
    }
}
