use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer data-zone="footer" class="footer">
            <a href="#" class="footer__link">"Términos"</a>
            " | "
            <a href="#" class="footer__link">"Privacidad"</a>
        </footer>
    }
}
