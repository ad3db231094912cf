//! Детали заявки для техника
//!
//! MVVM:
//! - view_model.rs: состояние страницы и команды (загрузка, смена статуса)
//! - view.rs: карточка заявки
//! - status_updater.rs: выбор и отправка рабочего статуса

mod status_updater;
mod view;
mod view_model;

pub use status_updater::StatusUpdater;
pub use view::OrderDetails;
pub use view_model::{order_id_param, OrderDetailsVm};
