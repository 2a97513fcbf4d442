//! Request extractors that report failures through [`AppError`].

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON request body decoded regardless of the `Content-Type` header.
///
/// Browser forms post JSON with whatever header the script sets, so the
/// header is not checked. Unreadable or malformed bodies become
/// [`AppError::BadRequest`] and keep the JSON error envelope.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::bad_request(rejection.body_text()))?;

        serde_json::from_slice(&bytes)
            .map(JsonBody)
            .map_err(|err| AppError::bad_request(format!("invalid JSON body: {err}")))
    }
}
