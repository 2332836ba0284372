//! HTTP client for the object-storage provider's REST API.
//!
//! The provider contract:
//!
//! - `POST {base}/upload` — multipart form with a `file` part and a `folder`
//!   field; returns `{public_id, secure_url}`.
//! - `POST {base}/destroy` — JSON `{public_id}`; returns `{result}` where
//!   `result` is `"ok"` or `"not found"`.
//! - `GET {base}/resources?prefix=...` — returns `{resources: [{public_id,
//!   secure_url}]}`.
//!
//! All endpoints use basic auth with the provider credential pair. Each
//! operation carries its own request timeout; a timeout surfaces as the
//! corresponding storage failure kind.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use serde::Deserialize;
use tracing::debug;

use droplink_core::config::StorageConfig;
use droplink_core::error::{AppError, ErrorKind};
use droplink_core::model::{DeleteOutcome, StoredObjectRef};
use droplink_core::result::AppResult;
use droplink_core::traits::ObjectStore;

/// Provider response for a completed upload.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    public_id: String,
    secure_url: String,
}

/// Provider response for a destroy call.
#[derive(Debug, Deserialize)]
struct DestroyResponse {
    result: String,
}

/// Provider response for a resource listing.
#[derive(Debug, Deserialize)]
struct ListResponse {
    resources: Vec<ResourceEntry>,
}

#[derive(Debug, Deserialize)]
struct ResourceEntry {
    public_id: String,
    secure_url: String,
}

/// Remote object-storage gateway.
///
/// Holds one stateless HTTP client for the process lifetime and is passed
/// into handlers explicitly, never held as ambient global state.
#[derive(Debug, Clone)]
pub struct HttpObjectStore {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    api_secret: String,
    folder: String,
    upload_timeout: Duration,
    delete_timeout: Duration,
}

impl HttpObjectStore {
    /// Create a gateway from the storage configuration.
    pub fn new(config: &StorageConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder().build().map_err(|e| {
            AppError::with_source(ErrorKind::Configuration, "Failed to build HTTP client", e)
        })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            api_secret: config.api_secret.clone(),
            folder: config.folder.clone(),
            upload_timeout: Duration::from_secs(config.upload_timeout_seconds),
            delete_timeout: Duration::from_secs(config.delete_timeout_seconds),
        })
    }
}

/// Map a destroy-call `result` string to a delete outcome.
fn destroy_outcome(result: &str) -> AppResult<DeleteOutcome> {
    match result {
        "ok" => Ok(DeleteOutcome::Deleted),
        "not found" => Ok(DeleteOutcome::NotFound),
        other => Err(AppError::storage_delete(format!(
            "Provider destroy returned unexpected result: {other}"
        ))),
    }
}

#[async_trait]
impl ObjectStore for HttpObjectStore {
    async fn put(&self, name: &str, data: Bytes) -> AppResult<StoredObjectRef> {
        let size = data.len();
        let part = reqwest::multipart::Part::bytes(data.to_vec()).file_name(name.to_string());
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("folder", self.folder.clone());

        let response = self
            .client
            .post(format!("{}/upload", self.base_url))
            .basic_auth(&self.api_key, Some(&self.api_secret))
            .timeout(self.upload_timeout)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::StorageUpload, format!("Upload failed: {e}"), e)
            })?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(AppError::storage_upload(format!(
                "Provider rejected upload with status {status}"
            )));
        }

        let body: UploadResponse = response.json().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::StorageUpload,
                format!("Malformed upload response: {e}"),
                e,
            )
        })?;

        debug!(object_id = %body.public_id, size, "Uploaded object");
        Ok(StoredObjectRef {
            object_id: body.public_id,
            url: body.secure_url,
        })
    }

    async fn delete(&self, object_id: &str) -> AppResult<DeleteOutcome> {
        let response = self
            .client
            .post(format!("{}/destroy", self.base_url))
            .basic_auth(&self.api_key, Some(&self.api_secret))
            .timeout(self.delete_timeout)
            .json(&serde_json::json!({ "public_id": object_id }))
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::StorageDelete, format!("Delete failed: {e}"), e)
            })?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(DeleteOutcome::NotFound);
        }
        if !response.status().is_success() {
            let status = response.status();
            return Err(AppError::storage_delete(format!(
                "Provider rejected delete with status {status}"
            )));
        }

        let body: DestroyResponse = response.json().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::StorageDelete,
                format!("Malformed destroy response: {e}"),
                e,
            )
        })?;

        debug!(object_id, result = %body.result, "Destroy call settled");
        destroy_outcome(&body.result)
    }

    async fn list(&self, folder: &str) -> AppResult<Vec<StoredObjectRef>> {
        let response = self
            .client
            .get(format!("{}/resources", self.base_url))
            .basic_auth(&self.api_key, Some(&self.api_secret))
            .timeout(self.delete_timeout)
            .query(&[("prefix", folder)])
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::StorageDelete, format!("List failed: {e}"), e)
            })?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(AppError::storage_delete(format!(
                "Provider rejected list with status {status}"
            )));
        }

        let body: ListResponse = response.json().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::StorageDelete,
                format!("Malformed list response: {e}"),
                e,
            )
        })?;

        Ok(body
            .resources
            .into_iter()
            .map(|r| StoredObjectRef {
                object_id: r.public_id,
                url: r.secure_url,
            })
            .collect())
    }
}
