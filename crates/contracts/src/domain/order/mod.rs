pub mod dto;

pub use dto::{OrderDisplayStatus, OrderDto, UpdateOrderStatusRequest};
