pub mod data_table;
pub mod notice;
pub mod ui;
