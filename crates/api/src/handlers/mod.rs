//! Request handlers.
//!
//! The four plain CRUD kinds share the generic handlers in [`board`];
//! [`absences`] adds the calendar-day list filter, [`alerts`] the
//! soft-delete operations, and [`auth`]/[`admin_login`] the two session
//! gate surfaces.

pub mod absences;
pub mod admin_login;
pub mod alerts;
pub mod auth;
pub mod board;
