use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Состояние чекбокса "выбрать все"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Unchecked,
    Checked,
    Indeterminate,
}

impl CheckState {
    pub fn from_counts(selected: usize, total: usize) -> Self {
        if total == 0 || selected == 0 {
            CheckState::Unchecked
        } else if selected >= total {
            CheckState::Checked
        } else {
            CheckState::Indeterminate
        }
    }
}

/// Checkbox component with optional label and indeterminate state
#[component]
pub fn Checkbox(
    /// Checked state
    #[prop(into)]
    state: Signal<CheckState>,
    /// Change event handler
    on_change: Callback<bool>,
    /// Label text
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Accessible label when no visible label is rendered
    #[prop(optional)]
    aria_label: &'static str,
    /// Disabled state
    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // indeterminate задаётся только через DOM-свойство
    Effect::new(move |_| {
        let indeterminate = state.get() == CheckState::Indeterminate;
        if let Some(input) = input_ref.get() {
            if let Some(el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                el.set_indeterminate(indeterminate);
            }
        }
    });

    view! {
        <label class="form__checkbox-wrapper" class:form__checkbox-wrapper--disabled=move || disabled.get()>
            <input
                node_ref=input_ref
                type="checkbox"
                class="form__checkbox"
                aria-label=aria_label
                prop:checked=move || state.get() == CheckState::Checked
                disabled=move || disabled.get()
                on:click=|ev| ev.stop_propagation()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            {move || label.get().map(|text| view! { <span class="form__checkbox-label">{text}</span> })}
        </label>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_from_counts() {
        assert_eq!(CheckState::from_counts(0, 10), CheckState::Unchecked);
        assert_eq!(CheckState::from_counts(3, 10), CheckState::Indeterminate);
        assert_eq!(CheckState::from_counts(10, 10), CheckState::Checked);
        assert_eq!(CheckState::from_counts(0, 0), CheckState::Unchecked);
    }
}
