//! Request DTOs.

use serde::Deserialize;
use uuid::Uuid;

/// Body of `DELETE /delete`: at least one of the two identifiers must be
/// present.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteObjectRequest {
    /// Provider object identifier, bare or as a full delivery URL.
    #[serde(default)]
    pub object_id: Option<String>,
    /// Ownership ledger record identifier.
    #[serde(default)]
    pub record_id: Option<Uuid>,
}
