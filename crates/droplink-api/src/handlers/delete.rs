//! Owner-checked delete handler.

use axum::Json;
use axum::extract::State;
use tracing::{debug, error, info};

use droplink_core::error::AppError;
use droplink_core::model::{DeleteOutcome, OwnershipRecord};
use droplink_core::object_id::normalize;

use crate::dto::request::DeleteObjectRequest;
use crate::dto::response::DeleteResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, JsonBody};
use crate::state::AppState;

/// DELETE /delete — remove an object from the provider and its ownership
/// record from the ledger.
///
/// Linear sequence, every failure terminal: resolve the target identifier
/// (directly or via a ledger record), check ownership, delete from the
/// provider with the normalized identifier, then delete the ledger record
/// with its stored key.
pub async fn delete_object(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(req): JsonBody<DeleteObjectRequest>,
) -> Result<Json<DeleteResponse>, ApiError> {
    // Resolve the target. `ledger_key` is the identifier the ledger stores
    // the record under; the provider delete always uses the normalized form.
    let (object_id, ledger_key) = match (req.object_id, req.record_id) {
        (Some(raw), _) => {
            let normalized = normalize(&raw);
            let (record, key) = find_record(&state, &raw, &normalized).await?;
            check_owner(&record, &auth)?;
            (normalized, key)
        }
        (None, Some(record_id)) => {
            let record = state
                .ledger
                .find_by_id(record_id)
                .await?
                .ok_or_else(|| AppError::not_found(format!("Record {record_id} not found")))?;
            check_owner(&record, &auth)?;
            (normalize(&record.object_id), record.object_id)
        }
        (None, None) => {
            return Err(AppError::validation("objectId or recordId is required").into());
        }
    };

    match state.store.delete(&object_id).await? {
        DeleteOutcome::Deleted => {}
        DeleteOutcome::NotFound => {
            debug!(object_id = %object_id, "Object already absent at provider");
        }
    }

    // The provider delete above is not compensated if this fails: the
    // object is gone while its record remains.
    if let Err(e) = state.ledger.delete_by_object_id(&ledger_key).await {
        error!(
            object_id = %object_id,
            ledger_key = %ledger_key,
            "Ledger delete failed after provider delete; record is dangling"
        );
        return Err(e.into());
    }

    info!(object_id = %object_id, owner = %auth.user_id, "Delete complete");

    Ok(Json(DeleteResponse { ok: true }))
}

/// Look up the ownership record for a directly supplied identifier.
///
/// The ledger may store either the bare identifier or exactly what the
/// client sent, so the raw form is tried first and the normalized form
/// second. Returns the record together with the key that matched.
async fn find_record(
    state: &AppState,
    raw: &str,
    normalized: &str,
) -> Result<(OwnershipRecord, String), ApiError> {
    if let Some(record) = state.ledger.find_by_object_id(raw).await? {
        return Ok((record, raw.to_string()));
    }
    if normalized != raw {
        if let Some(record) = state.ledger.find_by_object_id(normalized).await? {
            return Ok((record, normalized.to_string()));
        }
    }
    Err(AppError::not_found("No ownership record for that object").into())
}

/// Fail with `Forbidden` unless the authenticated user owns the record.
fn check_owner(record: &OwnershipRecord, auth: &AuthUser) -> Result<(), ApiError> {
    if record.owner_id != auth.user_id {
        return Err(AppError::forbidden("You do not own this object").into());
    }
    Ok(())
}
