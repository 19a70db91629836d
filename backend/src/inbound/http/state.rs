//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they depend
//! on the domain service alone and remain testable with any store behind it.

use std::sync::Arc;

use crate::domain::UserService;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Directory service owning the record store.
    pub users: Arc<UserService>,
}

impl HttpState {
    /// Construct state around a service instance.
    pub fn new(users: Arc<UserService>) -> Self {
        Self { users }
    }
}
