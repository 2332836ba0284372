//! `JsonBody` extractor — `axum::Json` with the rejection rewritten into
//! the service's JSON error envelope.
//!
//! Axum's stock `Json` rejection renders as plain text, which would leak a
//! non-JSON error body to clients sending malformed payloads.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};

use droplink_core::error::AppError;

use crate::error::ApiError;

/// JSON request body that rejects with a `{"error": ...}` response.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => Err(AppError::validation(rejection.body_text()).into()),
        }
    }
}
