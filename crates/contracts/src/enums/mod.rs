pub mod urgency_level;
pub mod work_status;

pub use urgency_level::UrgencyLevel;
pub use work_status::WorkStatus;
