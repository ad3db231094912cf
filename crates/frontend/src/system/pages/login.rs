use contracts::system::auth::{FieldError, LoginRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use thaw::*;

use crate::shared::api::ApiError;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::auth::context::{use_session, HOME_AFTER_LOGIN};

const LOGIN_FAILED: &str = "Error al iniciar sesión. Verifique sus credenciales.";

/// Текст ошибки входа: сообщение сервера, иначе общий текст
fn login_error_text(err: &ApiError) -> String {
    match err {
        ApiError::Server { message, .. } => message.clone(),
        ApiError::Forbidden { message } if !message.is_empty() => message.clone(),
        ApiError::Network(_) | ApiError::Malformed(_) => err.user_message(),
        _ => LOGIN_FAILED.to_string(),
    }
}

fn field_message(errors: &[FieldError], field: &str) -> Option<String> {
    errors
        .iter()
        .find(|e| e.field() == field)
        .map(|e| e.to_string())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let field_errors = RwSignal::new(Vec::<FieldError>::new());
    let error_message = RwSignal::new(Option::<String>::None);
    let is_loading = session.pending;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }

        let request = LoginRequest::new(email.get_untracked(), password.get_untracked());
        error_message.set(None);
        if let Err(errors) = request.validate() {
            field_errors.set(errors);
            return;
        }
        field_errors.set(Vec::new());

        let navigate = navigate.clone();
        spawn_local(async move {
            match session.login(request).await {
                Ok(()) => navigate(HOME_AFTER_LOGIN, NavigateOptions::default()),
                Err(e) => error_message.set(Some(login_error_text(&e))),
            }
        });
    };

    view! {
        <PageFrame page_id="login--system" category=PAGE_CAT_SYSTEM>
            <div class="login-container">
                <div class="login-box">
                    <h1>"Acceso"</h1>

                    <form on:submit=on_submit novalidate>
                        <div class="form-group">
                            <Label>"Correo electrónico"</Label>
                            <Input value=email input_type=InputType::Email placeholder="usuario@telconova.com" />
                            {move || field_errors.with(|e| field_message(e, "email")).map(|m| view! {
                                <p class="form-error">{m}</p>
                            })}
                        </div>

                        <div class="form-group">
                            <Label>"Contraseña"</Label>
                            <Input value=password input_type=InputType::Password />
                            {move || field_errors.with(|e| field_message(e, "password")).map(|m| view! {
                                <p class="form-error">{m}</p>
                            })}
                        </div>

                        <Show when=move || error_message.get().is_some()>
                            <div class="error-message">
                                {move || error_message.get().unwrap_or_default()}
                            </div>
                        </Show>

                        <button
                            type="submit"
                            class="btn-primary"
                            disabled=move || is_loading.get()
                        >
                            {move || if is_loading.get() { "Iniciando sesión..." } else { "Iniciar sesión" }}
                        </button>
                    </form>
                </div>
            </div>
        </PageFrame>
    }
}
