use crate::shared::components::data_table::{DataTableColumnHeader, TableController};
use crate::shared::components::ui::{Badge, CheckState, Checkbox};
use crate::shared::data_table::text::truncate_chars;
use crate::shared::data_table::{CellHint, ColumnDef, SelectionMode, TableRow as RowIdentity};
use leptos::prelude::*;
use thaw::*;

/// Рендер ячейки колонки данных по её подсказке
fn render_cell<T>(column: &ColumnDef<T>, row: &T) -> AnyView {
    let value = column.value(row);
    match column.cell {
        CellHint::Plain => view! { <span>{value.display()}</span> }.into_any(),
        CellHint::Truncate(max) => {
            let full = value.display();
            let short = truncate_chars(&full, max);
            view! { <span title=full>{short}</span> }.into_any()
        }
        CellHint::Badge(variant_of) => {
            let text = value.display();
            let variant = variant_of(&text).to_string();
            view! { <Badge variant=variant>{text}</Badge> }.into_any()
        }
        CellHint::OrPlaceholder(placeholder) if value.is_empty() => {
            view! { <span class="table__placeholder">{placeholder}</span> }.into_any()
        }
        CellHint::OrPlaceholder(_) => view! { <span>{value.display()}</span> }.into_any(),
        CellHint::Centered => {
            view! { <div style="text-align: center;">{value.display()}</div> }.into_any()
        }
    }
}

/// Таблица: заголовки, колонка выбора и текущая страница строк.
///
/// Синтетические колонки (без аксессора, например "Acciones") рендерятся
/// через `render_display`.
#[component]
pub fn DataTable<T>(
    controller: TableController<T>,
    #[prop(optional)] render_display: Option<Callback<(&'static str, T), AnyView>>,
    #[prop(optional, into)] empty_text: Option<String>,
) -> impl IntoView
where
    T: RowIdentity + Clone + PartialEq + Send + Sync + 'static,
{
    let mode = controller.selection_mode();
    let selectable = mode.is_enabled();
    let empty_text = empty_text.unwrap_or_else(|| "No hay resultados.".to_string());

    let page_state = Signal::derive(move || {
        let page_ids: Vec<String> = controller
            .model
            .with(|m| m.rows.iter().map(|(id, _)| id.clone()).collect());
        let selected = controller
            .state
            .with(|s| page_ids.iter().filter(|id| s.is_selected(id)).count());
        CheckState::from_counts(selected, page_ids.len())
    });

    view! {
        <div class="data-table">
            <Table>
                <TableHeader>
                    <TableRow>
                        {selectable.then(|| view! {
                            <TableHeaderCell class="fixed-checkbox-column">
                                {(mode == SelectionMode::Multi).then(|| view! {
                                    <Checkbox
                                        state=page_state
                                        aria_label="Seleccionar todo"
                                        on_change=Callback::new(move |checked| controller.set_page_selected(checked))
                                    />
                                })}
                            </TableHeaderCell>
                        })}
                        {move || controller.visible_columns().into_iter().map(|column| view! {
                            <DataTableColumnHeader
                                controller=controller
                                column_id=column.id
                                title=column.header
                                sortable=column.can_sort()
                            />
                        }).collect_view()}
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let columns = controller.visible_columns();
                        controller.model.get().rows.into_iter().map(|(key, row)| {
                            let key_for_state = key.clone();
                            let row_state = Signal::derive(move || {
                                if controller.is_selected(&key_for_state) {
                                    CheckState::Checked
                                } else {
                                    CheckState::Unchecked
                                }
                            });
                            let cells = columns.iter().map(|column| {
                                let content = if column.accessor.is_some() {
                                    render_cell(column, &row)
                                } else {
                                    match render_display {
                                        Some(render) => render.run((column.id, row.clone())),
                                        None => view! { <></> }.into_any(),
                                    }
                                };
                                view! {
                                    <TableCell>
                                        <TableCellLayout>{content}</TableCellLayout>
                                    </TableCell>
                                }
                            }).collect_view();

                            view! {
                                <TableRow>
                                    {selectable.then(|| {
                                        let key = key.clone();
                                        view! {
                                            <TableCell class="fixed-checkbox-column">
                                                <Checkbox
                                                    state=row_state
                                                    aria_label="Seleccionar fila"
                                                    on_change=Callback::new(move |checked| controller.toggle_row(&key, checked))
                                                />
                                            </TableCell>
                                        }
                                    })}
                                    {cells}
                                </TableRow>
                            }
                        }).collect_view()
                    }}
                </TableBody>
            </Table>
            <Show when=move || controller.model.with(|m| m.rows.is_empty())>
                <div class="data-table__empty">{empty_text.clone()}</div>
            </Show>
        </div>
    }
}
