//! `AuthUser` extractor — pulls the bearer token from the Authorization
//! header and resolves the caller identity through the token verifier.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use droplink_core::error::AppError;
use droplink_core::model::AuthenticatedUser;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user available in handlers.
///
/// Identity is resolved per request and never cached.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub AuthenticatedUser);

impl std::ops::Deref for AuthUser {
    type Target = AuthenticatedUser;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized("Invalid Authorization header format"))?;

        let user = state.verifier.verify(token).await?;

        Ok(AuthUser(user))
    }
}
