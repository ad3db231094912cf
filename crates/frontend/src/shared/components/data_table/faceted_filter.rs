use crate::shared::components::data_table::TableController;
use crate::shared::components::ui::{CheckState, Checkbox};
use crate::shared::data_table::{FilterVariant, TableRow as RowIdentity};
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Фасетный фильтр колонки: выпадающий список значений со счётчиками.
/// Для `Select` выбор значения заменяет прежний, для `MultiSelect` добавляется.
#[component]
pub fn DataTableFacetedFilter<T>(
    controller: TableController<T>,
    column_id: &'static str,
    title: &'static str,
) -> impl IntoView
where
    T: RowIdentity + Clone + PartialEq + Send + Sync + 'static,
{
    let open = RwSignal::new(false);
    let single = controller
        .column(column_id)
        .is_some_and(|c| c.meta.variant == Some(FilterVariant::Select));

    let selected = Signal::derive(move || {
        controller
            .filter_value(column_id)
            .and_then(|v| v.as_values().cloned())
            .unwrap_or_default()
    });

    view! {
        <div class="faceted-filter">
            <Button
                appearance=ButtonAppearance::Secondary
                size=ButtonSize::Small
                on_click=move |_| open.update(|o| *o = !*o)
            >
                {icon("plus-circle")}
                " "{title}
                {move || {
                    let count = selected.with(|s| s.len());
                    (count > 0).then(|| view! {
                        <span class="faceted-filter__count">{count}</span>
                    })
                }}
            </Button>
            <Show when=move || open.get()>
                <div class="faceted-filter__panel" role="listbox">
                    {move || {
                        let options = controller.facet_options(column_id);
                        if options.is_empty() {
                            return view! {
                                <div class="faceted-filter__empty">"Sin opciones."</div>
                            }.into_any();
                        }
                        options.into_iter().map(|option| {
                            let value = option.value.clone();
                            let value_for_state = option.value.clone();
                            let state = Signal::derive(move || {
                                if selected.with(|s| s.contains(&value_for_state)) {
                                    CheckState::Checked
                                } else {
                                    CheckState::Unchecked
                                }
                            });
                            view! {
                                <div class="faceted-filter__option">
                                    <Checkbox
                                        state=state
                                        label=option.label.clone()
                                        on_change=Callback::new(move |_| {
                                            controller.toggle_filter_value(column_id, &value, single)
                                        })
                                    />
                                    {option.count.map(|count| view! {
                                        <span class="faceted-filter__option-count">{count}</span>
                                    })}
                                </div>
                            }
                        }).collect_view().into_any()
                    }}
                    <Show when=move || selected.with(|s| !s.is_empty())>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            size=ButtonSize::Small
                            on_click=move |_| controller.set_filter(column_id, None)
                        >
                            "Limpiar filtros"
                        </Button>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
