use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

const INVALID_BODY: &str = "Invalid request body";

/// JSON request body that tolerates a missing body or content type.
///
/// An empty body deserializes as `T::default()`, so absent fields surface as
/// the endpoint's own "Param ... is required" errors.
pub(super) struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|err| AppError::client(err.status(), INVALID_BODY, err.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }

        serde_json::from_slice(&bytes)
            .map(Self)
            .map_err(|err| AppError::bad_request(INVALID_BODY, err.to_string()))
    }
}
