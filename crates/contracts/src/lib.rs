//! Wire contracts shared between the TelcoNova front end and the external
//! order-management API.
//!
//! Every type here mirrors a JSON shape the API produces or accepts. Field
//! names follow the API (camelCase) through `serde` renames.

pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
