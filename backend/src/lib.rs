//! Directory service backend library.
//!
//! An in-memory user directory with an explicit contract about which record
//! fields may be absent. The domain layer owns the record store behind a
//! port; the HTTP layer is a thin adapter translating service outcomes into
//! wire responses.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
