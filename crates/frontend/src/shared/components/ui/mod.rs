pub mod badge;
pub mod checkbox;

pub use badge::Badge;
pub use checkbox::{CheckState, Checkbox};
