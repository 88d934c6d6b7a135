//! Request extractors that turn malformed input into [`AppError::BadRequest`]
//! instead of axum's default plain-text rejections.

use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use crate::utils::error::AppError;

/// The `{id}` segment of `/users/{id}`, parsed as a base-10 integer.
///
/// Extraction runs before method dispatch reaches a handler body, so a bad
/// identifier never causes a database call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserId(pub i32);

impl UserId {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        raw.parse::<i32>()
            .map(UserId)
            .map_err(|_| AppError::BadRequest("Invalid user ID".to_string()))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::BadRequest("Invalid user ID".to_string()))?;

        UserId::parse(&raw)
    }
}

/// A JSON request body. Unlike `axum::Json` it ignores `Content-Type` and
/// reports every decode failure as a 400 carrying serde's message.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        serde_json::from_slice(&bytes)
            .map(JsonBody)
            .map_err(|e| AppError::BadRequest(e.to_string()))
    }
}
