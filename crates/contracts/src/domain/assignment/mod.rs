pub mod dto;

pub use dto::{AssignmentDto, AutoAssignQuery, NewAssignmentDto, TechnicianAssignmentReportDto};
