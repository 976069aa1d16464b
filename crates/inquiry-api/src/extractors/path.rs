//! Path parameter extractors

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use inquiry_core::InquiryId;

use crate::response::ApiError;

/// Inquiry id taken from the `:id` path segment
///
/// An id that does not parse cannot name an inquiry, so it is reported as
/// not found rather than as a bad request.
#[derive(Debug, Clone, Copy)]
pub struct InquiryIdPath(pub InquiryId);

#[async_trait]
impl<S> FromRequestParts<S> for InquiryIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::not_found(e.body_text()))?;

        InquiryId::parse(&raw)
            .map(InquiryIdPath)
            .map_err(|_| ApiError::not_found(raw))
    }
}
