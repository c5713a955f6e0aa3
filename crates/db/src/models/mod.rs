//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO for full-record replaces
//!
//! DTO fields are `Option` so a missing field reaches the validation hook
//! (and produces a proper validation error) instead of failing JSON
//! deserialization.

pub mod absence;
pub mod admin_login_log;
pub mod alert;
pub mod equipment;
pub mod notice;
pub mod on_call;
