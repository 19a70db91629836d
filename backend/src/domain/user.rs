//! User record data model.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Directory entry for one user.
///
/// ## Invariants
/// - `id` identifies at most one record in a store at any time.
/// - `email` is genuinely optional: absence is a valid, expected state and is
///   tracked as [`None`], never as an empty string.
///
/// Records are immutable values; stores hand out clones, not references into
/// their backing structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UserRecord {
    /// Unique key, assigned by the caller at creation time.
    #[schema(example = "1")]
    id: String,
    /// Display name.
    #[schema(example = "Alice Smith")]
    name: String,
    /// Contact address. Omitted from JSON when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "alice@example.com")]
    email: Option<String>,
    /// Organisational unit.
    #[schema(example = "IT")]
    department: String,
}

impl UserRecord {
    /// Build a record from its four fields.
    ///
    /// No validation is applied beyond the type-level presence contract:
    /// empty strings are accepted for every always-present field.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: Option<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email,
            department: department.into(),
        }
    }

    /// Unique record key.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Contact address, when one was provided.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Organisational unit.
    pub fn department(&self) -> &str {
        &self.department
    }

    /// Consume the record, returning the optional email.
    pub fn into_email(self) -> Option<String> {
        self.email
    }
}
