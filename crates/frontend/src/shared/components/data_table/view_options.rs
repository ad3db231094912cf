use crate::shared::components::data_table::TableController;
use crate::shared::components::ui::{CheckState, Checkbox};
use crate::shared::data_table::TableRow as RowIdentity;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Меню видимости колонок (только колонки с `enable_hiding`)
#[component]
pub fn DataTableViewOptions<T>(controller: TableController<T>) -> impl IntoView
where
    T: RowIdentity + Clone + PartialEq + Send + Sync + 'static,
{
    let open = RwSignal::new(false);
    let hideable: Vec<(&'static str, &'static str)> = controller.columns.with_value(|columns| {
        columns
            .iter()
            .filter(|c| c.enable_hiding && c.accessor.is_some())
            .map(|c| (c.id, c.title()))
            .collect()
    });

    view! {
        <div class="view-options">
            <Button
                appearance=ButtonAppearance::Secondary
                size=ButtonSize::Small
                on_click=move |_| open.update(|o| *o = !*o)
            >
                {icon("sliders")}
                " Vista"
            </Button>
            <Show when=move || open.get()>
                <div class="view-options__panel">
                    <div class="view-options__title">"Mostrar columnas"</div>
                    {hideable.iter().map(|&(id, title)| {
                        let state = Signal::derive(move || {
                            if controller.is_visible(id) {
                                CheckState::Checked
                            } else {
                                CheckState::Unchecked
                            }
                        });
                        view! {
                            <Checkbox
                                state=state
                                label=title.to_string()
                                on_change=Callback::new(move |_| controller.toggle_visibility(id))
                            />
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}
