use crate::shared::components::data_table::{
    DataTableFacetedFilter, DataTableViewOptions, TableController,
};
use crate::shared::data_table::TableRow as RowIdentity;
use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Задержка перед применением текста поиска, мс
const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Тулбар таблицы: поиск по выделенной колонке, фасетные фильтры,
/// сброс фильтров и меню видимости колонок.
#[component]
pub fn DataTableToolbar<T>(
    controller: TableController<T>,
    /// Колонка для текстового поиска
    #[prop(optional)]
    search_column: Option<&'static str>,
    #[prop(optional, into)] search_placeholder: Option<String>,
) -> impl IntoView
where
    T: RowIdentity + Clone + PartialEq + Send + Sync + 'static,
{
    let search = RwSignal::new(
        search_column
            .map(|id| controller.state.with_untracked(|s| {
                s.filter_value(id)
                    .and_then(|v| v.as_text())
                    .unwrap_or_default()
                    .to_string()
            }))
            .unwrap_or_default(),
    );
    let placeholder = search_placeholder.unwrap_or_else(|| "Buscar...".to_string());

    // debounce: применяется только последнее значение, пришедшее за 300 мс
    let generation = StoredValue::new(0_u64);
    let first_run = StoredValue::new(true);
    Effect::new(move |_| {
        let text = search.get();
        if first_run.get_value() {
            first_run.set_value(false);
            return;
        }
        let Some(column_id) = search_column else {
            return;
        };
        generation.update_value(|g| *g += 1);
        let mine = generation.get_value();
        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if generation.try_get_value() == Some(mine) {
                controller.set_filter_text(column_id, text);
            }
        });
    });

    let faceted: Vec<(&'static str, &'static str)> = controller.columns.with_value(|columns| {
        columns
            .iter()
            .filter(|c| c.is_faceted())
            .map(|c| (c.id, c.title()))
            .collect()
    });

    let reset = move |_| {
        generation.update_value(|g| *g += 1);
        search.set(String::new());
        controller.reset_filters();
    };

    view! {
        <div class="data-table-toolbar">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    {search_column.map(|_| view! {
                        <Input value=search placeholder=placeholder.clone() />
                    })}
                    {faceted.into_iter().map(|(column_id, title)| view! {
                        <DataTableFacetedFilter controller=controller column_id=column_id title=title />
                    }).collect_view()}
                    <Show when=move || controller.is_filtered()>
                        <Button appearance=ButtonAppearance::Subtle size=ButtonSize::Small on_click=reset>
                            "Limpiar "
                            {icon("x")}
                        </Button>
                    </Show>
                </Flex>
                <DataTableViewOptions controller=controller />
            </Flex>
        </div>
    }
}
