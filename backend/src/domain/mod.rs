//! Domain primitives and services.
//!
//! Purpose: define the user record model, the store port, and the directory
//! service that owns it. Everything here is transport agnostic; inbound
//! adapters translate results and failures into wire responses.
//!
//! Public surface:
//! - [`UserRecord`] — immutable directory entry with an optional email.
//! - [`UserService`] — lookup, listing, creation, and the unsafe/safe
//!   uppercase-email pair.
//! - [`Error`] / [`ErrorCode`] — transport-agnostic failure payload.

pub mod error;
pub mod ports;
pub mod user;
pub mod user_service;

pub use self::error::{Error, ErrorCode};
pub use self::user::UserRecord;
pub use self::user_service::{EMAIL_NOT_PROVIDED, USER_NOT_FOUND, UserService};
