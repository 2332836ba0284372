//! Application state shared across all handlers.

use std::sync::Arc;

use droplink_core::config::AppConfig;
use droplink_core::traits::{ObjectStore, OwnershipLedger, TokenVerifier};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. Collaborators are
/// trait objects constructed once at startup and injected explicitly; no
/// ambient global client handles exist anywhere in the service.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Storage gateway to the remote object-storage provider.
    pub store: Arc<dyn ObjectStore>,
    /// Gateway to the external ownership ledger.
    pub ledger: Arc<dyn OwnershipLedger>,
    /// Bearer-token verifier.
    pub verifier: Arc<dyn TokenVerifier>,
}
