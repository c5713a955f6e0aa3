//! Repository layer.
//!
//! The four plain CRUD kinds implement [`crate::resource::BoardCrud`] here;
//! alerts implement the read side plus their soft-delete operations, and
//! the admin login log uses a standalone zero-sized repo struct since it
//! is append-only and shares nothing with the board kinds.

pub mod absence;
pub mod admin_login_log;
pub mod alert;
pub mod equipment;
pub mod notice;
pub mod on_call;

pub use admin_login_log::AdminLoginLogRepo;
