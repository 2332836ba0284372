//! Embedded ledger schema migrations.

use sqlx::PgPool;
use tracing::info;

use droplink_core::error::{AppError, ErrorKind};
use droplink_core::result::AppResult;

/// Run all pending migrations against the ledger database.
pub async fn run_migrations(pool: &PgPool) -> AppResult<()> {
    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Ledger, format!("Migration failed: {e}"), e)
        })?;

    info!("Ledger migrations up to date");
    Ok(())
}
