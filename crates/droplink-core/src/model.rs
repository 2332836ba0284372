//! Domain models shared across Droplink crates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored object as known to the storage provider: the provider-assigned
/// identifier used for all mutation calls, plus a durable public URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredObjectRef {
    /// Provider-assigned public identifier.
    pub object_id: String,
    /// Durable public URL for the object.
    pub url: String,
}

/// A row in the external ownership ledger mapping an object identifier to
/// the user that owns it. At most one live record exists per `object_id`.
///
/// The service reads and deletes these records; it never creates them.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct OwnershipRecord {
    /// Ledger record identifier.
    pub id: Uuid,
    /// Provider object identifier this record covers.
    pub object_id: String,
    /// Owning user.
    pub owner_id: Uuid,
    /// Record creation time.
    pub created_at: DateTime<Utc>,
}

/// A caller identity resolved from a bearer token.
///
/// Valid only for the duration of one request; never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// Identity-provider user id (`sub` claim).
    pub user_id: Uuid,
}

/// Outcome of a provider-side delete.
///
/// `NotFound` is a non-error outcome: deleting an already-deleted object
/// still counts as success at the handler level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The provider removed the object.
    Deleted,
    /// The provider had no object under that identifier.
    NotFound,
}
