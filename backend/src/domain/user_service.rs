//! User directory service.
//!
//! Sole owner of the record store and the one place where the optional-email
//! contract is enforced or, for [`UserService::email_uppercase_unsafe`],
//! deliberately violated. The unsafe/safe pair exists to contrast unchecked
//! access to an optional field with the canonical total handling of it; the
//! unsafe path is a documented negative example and must stay reproducible.

use std::sync::Arc;

use crate::domain::ports::{UserStore, UserStoreError};
use crate::domain::{Error, UserRecord};

/// Sentinel returned by the safe path when no record exists for the id.
pub const USER_NOT_FOUND: &str = "USER_NOT_FOUND";
/// Sentinel returned by the safe path when the record has no email.
pub const EMAIL_NOT_PROVIDED: &str = "EMAIL_NOT_PROVIDED";

/// Business operations over the record store.
///
/// Every operation is a single store access followed by presence checks;
/// there is no state machine and no background work.
pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    /// Create a service owning the given store handle.
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    fn map_store_error(error: UserStoreError) -> Error {
        match error {
            UserStoreError::Connection { message } => {
                Error::service_unavailable(format!("user store unavailable: {message}"))
            }
            UserStoreError::Query { message } => {
                Error::internal(format!("user store error: {message}"))
            }
        }
    }

    /// Return every stored record, in unspecified order.
    ///
    /// # Errors
    /// Returns an error only when the store itself fails; an empty directory
    /// is `Ok(vec![])`.
    pub async fn find_all(&self) -> Result<Vec<UserRecord>, Error> {
        self.store.list_all().await.map_err(Self::map_store_error)
    }

    /// Look up a record by id.
    ///
    /// Absence is an expected, non-exceptional outcome: callers receive
    /// `Ok(None)` and must branch on it explicitly.
    ///
    /// # Errors
    /// Returns an error only when the store itself fails.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<UserRecord>, Error> {
        self.store.get(id).await.map_err(Self::map_store_error)
    }

    /// Insert a record, replacing any prior record with the same id
    /// wholesale, and echo the stored record back.
    ///
    /// No field validation is applied beyond the type-level presence
    /// contract.
    ///
    /// # Errors
    /// Returns an error only when the store itself fails.
    pub async fn create(&self, record: UserRecord) -> Result<UserRecord, Error> {
        self.store
            .put(&record)
            .await
            .map_err(Self::map_store_error)?;
        Ok(record)
    }

    /// Upper-case a user's email without checking that it exists.
    ///
    /// Negative example, kept deliberately: the operation is only
    /// well-defined when the record exists AND its email is present, and
    /// neither precondition is checked before use. Do not "fix" it and do
    /// not catch the panic: it is the fixture proving the safe path's
    /// necessity. [`UserService::email_uppercase_safe`] is the correct
    /// version.
    ///
    /// # Errors
    /// Returns an error only when the store itself fails.
    ///
    /// # Panics
    /// Panics when no record exists for `id`, or when the record's email is
    /// absent.
    pub async fn email_uppercase_unsafe(&self, id: &str) -> Result<String, Error> {
        let record = self.find_by_id(id).await?;
        // Unchecked dereference of two optional values, by contract.
        let email = record
            .expect("user record must be present before accessing its email")
            .into_email()
            .expect("user email must be present before upper-casing");
        Ok(email.to_uppercase())
    }

    /// Upper-case a user's email, total over all inputs.
    ///
    /// Returns [`USER_NOT_FOUND`] when no record exists for `id`,
    /// [`EMAIL_NOT_PROVIDED`] when the record exists without an email, and
    /// the upper-cased email otherwise.
    ///
    /// # Errors
    /// Returns an error only when the store itself fails.
    pub async fn email_uppercase_safe(&self, id: &str) -> Result<String, Error> {
        let Some(record) = self.find_by_id(id).await? else {
            return Ok(USER_NOT_FOUND.to_owned());
        };
        match record.email() {
            Some(email) => Ok(email.to_uppercase()),
            None => Ok(EMAIL_NOT_PROVIDED.to_owned()),
        }
    }
}
