//! Ownership ledger trait for the external record store.

use async_trait::async_trait;
use uuid::Uuid;

use crate::model::OwnershipRecord;
use crate::result::AppResult;

/// Gateway to the external ledger that maps object identifiers to owners.
///
/// The service reads and deletes records; records are created by an
/// out-of-scope caller. Delete-by-key is assumed atomic on the ledger side.
#[async_trait]
pub trait OwnershipLedger: Send + Sync + std::fmt::Debug + 'static {
    /// Look up the record covering an object identifier.
    async fn find_by_object_id(&self, object_id: &str) -> AppResult<Option<OwnershipRecord>>;

    /// Look up a record by its ledger id.
    async fn find_by_id(&self, record_id: Uuid) -> AppResult<Option<OwnershipRecord>>;

    /// Delete the record covering an object identifier.
    async fn delete_by_object_id(&self, object_id: &str) -> AppResult<()>;
}
