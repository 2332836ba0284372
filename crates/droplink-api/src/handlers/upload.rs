//! Upload handler.

use axum::Json;
use axum::extract::{Multipart, State};
use bytes::Bytes;
use tracing::info;

use droplink_core::error::AppError;

use crate::dto::response::UploadResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /upload — multipart upload of a single `file` field.
///
/// The file is buffered in memory for the duration of the request and
/// forwarded to the storage gateway in one attempt. A failed gateway call
/// leaves nothing behind to clean up on our side.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut file_name: Option<String> = None;
    let mut data: Option<Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?
    {
        if field.name() == Some("file") {
            file_name = field.file_name().map(String::from);
            data = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| AppError::validation(format!("Read error: {e}")))?,
            );
        }
    }

    let file_name = file_name
        .filter(|n| !n.is_empty())
        .ok_or_else(|| AppError::validation("file field with a file name is required"))?;
    let data = data.ok_or_else(|| AppError::validation("file field is required"))?;
    if data.is_empty() {
        return Err(AppError::validation("uploaded file is empty").into());
    }

    let size = data.len();
    let object = state.store.put(&file_name, data).await?;

    info!(object_id = %object.object_id, name = %file_name, size, "Upload complete");

    Ok(Json(UploadResponse {
        url: object.url,
        object_id: object.object_id,
    }))
}
