//! Назначение техника на заявку (страница супервизора)
//!
//! - view_model.rs: загрузка заявки и отчёта, команды назначения
//! - view.rs: карточка заявки, кнопки назначения, таблица техников

mod view;
mod view_model;

pub use view::OrderAssignmentPage;
pub use view_model::{AssignmentNotice, OrderAssignmentVm};
