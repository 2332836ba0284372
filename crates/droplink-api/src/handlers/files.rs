//! Listing handler.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{FileEntry, FilesResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /files — list objects under the configured logical folder.
///
/// Best-effort snapshot; not guaranteed consistent with concurrent uploads
/// or deletes.
pub async fn list_files(State(state): State<AppState>) -> Result<Json<FilesResponse>, ApiError> {
    let objects = state.store.list(&state.config.storage.folder).await?;

    Ok(Json(FilesResponse {
        files: objects
            .into_iter()
            .map(|o| FileEntry {
                object_id: o.object_id,
                url: o.url,
            })
            .collect(),
    }))
}
