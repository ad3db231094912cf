use leptos::prelude::*;
use thaw::*;

/// Индикатор загрузки страницы
#[component]
pub fn PageLoading(#[prop(into)] text: String) -> impl IntoView {
    view! {
        <Flex gap=FlexGap::Small style="align-items: center; justify-content: center; padding: var(--spacing-xl);">
            <Spinner />
            <span>{text}</span>
        </Flex>
    }
}

/// Ошибка, заменяющая содержимое страницы
#[component]
pub fn PageError(
    #[prop(into)] message: String,
    #[prop(optional, into)] title: Option<String>,
) -> impl IntoView {
    view! {
        <div class="page-error" role="alert">
            {title.map(|t| view! { <h1 class="page-error__title">{t}</h1> })}
            <p class="page-error__text">{message}</p>
        </div>
    }
}

/// Встроенное уведомление: ошибка или предупреждение рядом с действием
#[component]
pub fn InlineNotice(
    #[prop(into)] message: String,
    /// "error" | "warning" | "success"
    #[prop(optional)]
    kind: &'static str,
) -> impl IntoView {
    let intent = match kind {
        "warning" => MessageBarIntent::Warning,
        "success" => MessageBarIntent::Success,
        _ => MessageBarIntent::Error,
    };
    view! {
        <MessageBar intent=intent>
            <span>{message}</span>
        </MessageBar>
    }
}
