pub mod order_assignment;
pub mod report_list;
