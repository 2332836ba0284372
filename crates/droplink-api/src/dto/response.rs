//! Response DTOs.

use serde::{Deserialize, Serialize};

/// Successful upload: the durable public URL and the provider identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    /// Durable public URL of the uploaded object.
    pub url: String,
    /// Provider-assigned object identifier.
    pub object_id: String,
}

/// Successful delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// Always `true` on success.
    pub ok: bool,
}

/// Listing of stored objects under the configured folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilesResponse {
    /// Objects in the snapshot.
    pub files: Vec<FileEntry>,
}

/// One listed object.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    /// Provider-assigned object identifier.
    pub object_id: String,
    /// Public URL.
    pub url: String,
}
