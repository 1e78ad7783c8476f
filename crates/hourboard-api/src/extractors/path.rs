//! Path parameter extractor
//!
//! Parses a single document id from the route path.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use hourboard_core::DocumentId;

use crate::response::ApiError;

/// A single `DocumentId` taken from the path (`/users/:user_id`, `/events/:event_id`, ...)
#[derive(Debug, Clone)]
pub struct DocumentPath(pub DocumentId);

#[async_trait]
impl<S> FromRequestParts<S> for DocumentPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        let id = DocumentId::parse(&raw).map_err(|_| ApiError::invalid_path("Invalid document id"))?;
        Ok(DocumentPath(id))
    }
}
