//! Ownership record repository.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use droplink_core::error::{AppError, ErrorKind};
use droplink_core::model::OwnershipRecord;
use droplink_core::result::AppResult;
use droplink_core::traits::OwnershipLedger;

/// Repository for ownership record lookups and deletion.
///
/// Records are created by an external caller; this service only reads and
/// deletes them.
#[derive(Debug, Clone)]
pub struct OwnershipRepository {
    pool: PgPool,
}

impl OwnershipRepository {
    /// Create a new ownership repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OwnershipLedger for OwnershipRepository {
    async fn find_by_object_id(&self, object_id: &str) -> AppResult<Option<OwnershipRecord>> {
        sqlx::query_as::<_, OwnershipRecord>(
            "SELECT * FROM ownership_records WHERE object_id = $1",
        )
        .bind(object_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Ledger, "Failed to look up record by object id", e)
        })
    }

    async fn find_by_id(&self, record_id: Uuid) -> AppResult<Option<OwnershipRecord>> {
        sqlx::query_as::<_, OwnershipRecord>("SELECT * FROM ownership_records WHERE id = $1")
            .bind(record_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Ledger, "Failed to look up record by id", e)
            })
    }

    async fn delete_by_object_id(&self, object_id: &str) -> AppResult<()> {
        sqlx::query("DELETE FROM ownership_records WHERE object_id = $1")
            .bind(object_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Ledger, "Failed to delete record", e))?;

        Ok(())
    }
}
