//! Storage gateway trait for the remote object-storage provider.

use async_trait::async_trait;
use bytes::Bytes;

use crate::model::{DeleteOutcome, StoredObjectRef};
use crate::result::AppResult;

/// Gateway to the remote object-storage provider.
///
/// Every method is a single attempt against the provider — no retry, no
/// partial-failure cleanup. The trait is defined here in `droplink-core`
/// and implemented in `droplink-storage`.
#[async_trait]
pub trait ObjectStore: Send + Sync + std::fmt::Debug + 'static {
    /// Upload one object under the given file name.
    ///
    /// Exactly one remote object is created per successful call; a failed
    /// call creates none.
    async fn put(&self, name: &str, data: Bytes) -> AppResult<StoredObjectRef>;

    /// Delete the object with the given canonical identifier.
    ///
    /// A provider-reported "not found" is returned as
    /// [`DeleteOutcome::NotFound`], not as an error.
    async fn delete(&self, object_id: &str) -> AppResult<DeleteOutcome>;

    /// List the objects under a logical folder.
    ///
    /// Best-effort snapshot; not consistent with concurrent mutations.
    async fn list(&self, folder: &str) -> AppResult<Vec<StoredObjectRef>>;
}
