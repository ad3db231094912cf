use contracts::enums::WorkStatus;
use leptos::prelude::*;
use thaw::*;

use super::view_model::OrderDetailsVm;
use crate::shared::components::notice::InlineNotice;

/// Блок смены рабочего статуса заявки
#[component]
pub fn StatusUpdater(vm: OrderDetailsVm) -> impl IntoView {
    let disabled = vm.is_update_disabled();

    view! {
        <div class="status-updater">
            <Label>"Cambiar Estado de la Orden"</Label>
            <Flex gap=FlexGap::Small align=FlexAlign::Center>
                <Select value=vm.selected_status>
                    <option value="" disabled=true>"Seleccione un estado"</option>
                    {WorkStatus::all().into_iter().map(|status| view! {
                        <option value=status.code()>{status.display_name()}</option>
                    }).collect_view()}
                </Select>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.change_status()
                    disabled=disabled
                >
                    {move || if vm.updating.get() { "Cambiando..." } else { "Cambiar estado" }}
                </Button>
            </Flex>
            {move || vm.update_error.get().map(|message| view! {
                <InlineNotice message=message kind="error" />
            })}
            {move || vm.update_success.get().map(|message| view! {
                <InlineNotice message=message kind="success" />
            })}
        </div>
    }
}
