//! Liveness handler.

/// GET / — plain-text liveness response.
pub async fn liveness() -> &'static str {
    "droplink is running"
}
