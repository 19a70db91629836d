//! Process-local user store adapter.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::UserRecord;
use crate::domain::ports::{UserStore, UserStoreError};

/// In-memory [`UserStore`] backed by a lock-guarded hash map.
///
/// Storage is scoped to the process lifetime; nothing is durable. One
/// `RwLock` guards the whole map so reads and writes never interleave
/// inconsistently under actix's multi-threaded runtime, and the lock is
/// never held across an await point. Iteration order of the backing map is
/// unspecified, so neither is `list_all` ordering.
///
/// The only failure mode is lock poisoning after a panicking writer; it is
/// surfaced as [`UserStoreError::Query`]. In a healthy process every
/// operation succeeds.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    records: RwLock<HashMap<String, UserRecord>>,
}

impl InMemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the sample directory.
    ///
    /// Stands in for a database or external data source. Bob's missing
    /// email is deliberate: it keeps the optional-field contract exercised
    /// from startup.
    pub fn seeded() -> Self {
        let store = Self::new();
        let seed = [
            UserRecord::new("1", "Alice Smith", Some("alice@example.com".into()), "IT"),
            UserRecord::new("2", "Bob Johnson", None, "HR"),
            UserRecord::new(
                "3",
                "Charlie Brown",
                Some("charlie@example.com".into()),
                "Finance",
            ),
        ];
        {
            let mut records = store
                .records
                .write()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            for record in seed {
                records.insert(record.id().to_owned(), record);
            }
        }
        store
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn get(&self, id: &str) -> Result<Option<UserRecord>, UserStoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| UserStoreError::query("user store lock poisoned"))?;
        Ok(records.get(id).cloned())
    }

    async fn put(&self, record: &UserRecord) -> Result<(), UserStoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| UserStoreError::query("user store lock poisoned"))?;
        records.insert(record.id().to_owned(), record.clone());
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<UserRecord>, UserStoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| UserStoreError::query("user store lock poisoned"))?;
        Ok(records.values().cloned().collect())
    }
}
