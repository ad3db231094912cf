pub mod assignment;
pub mod order;
