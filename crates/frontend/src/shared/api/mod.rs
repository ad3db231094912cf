//! HTTP-клиент к внешнему REST API.
//!
//! Все запросы идут с `credentials: include` (сессия в cookie), ошибки
//! сводятся к [`ApiError`], устаревшие ответы отбрасываются через [`RequestScope`].

pub mod client;
pub mod error;
pub mod load_state;
pub mod request;

pub use client::{get_json, post_empty, post_json, put_json};
pub use error::ApiError;
pub use load_state::LoadState;
pub use request::{RequestScope, RequestSequence, RequestTicket};
