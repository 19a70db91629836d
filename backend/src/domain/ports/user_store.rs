//! Port abstraction for user record storage adapters and their errors.
//!
//! The service depends on this trait alone, so the process-local map used in
//! this repository can later be swapped for a durable backend satisfying the
//! same contract. Absence is data on this boundary: a missing id is
//! `Ok(None)`, never an error.

use async_trait::async_trait;

use crate::domain::UserRecord;

/// Errors raised by user store adapters.
///
/// The in-process adapter shipped with this repository never returns
/// [`UserStoreError::Connection`]; the variant exists for durable backends
/// implementing the same port.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserStoreError {
    /// Store connection could not be established.
    #[error("user store connection failed: {message}")]
    Connection {
        /// Adapter-provided failure description.
        message: String,
    },
    /// Query or mutation failed during execution.
    #[error("user store query failed: {message}")]
    Query {
        /// Adapter-provided failure description.
        message: String,
    },
}

impl UserStoreError {
    /// Build a [`UserStoreError::Connection`] from any message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Build a [`UserStoreError::Query`] from any message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for keyed storage of [`UserRecord`] values.
///
/// Implementations return snapshots (cloned records), never handles into
/// their backing structure, and make no promise about `list_all` ordering.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fetch a record by id. Absence is a normal return value.
    async fn get(&self, id: &str) -> Result<Option<UserRecord>, UserStoreError>;

    /// Insert a record, replacing any prior record with the same id.
    async fn put(&self, record: &UserRecord) -> Result<(), UserStoreError>;

    /// Return a snapshot of every stored record, in unspecified order.
    async fn list_all(&self) -> Result<Vec<UserRecord>, UserStoreError>;
}
