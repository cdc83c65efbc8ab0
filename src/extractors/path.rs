//! Integer `{id}` path segment.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Numeric item id taken from the route's single path parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for ItemId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state).await?;
        Ok(ItemId(id))
    }
}
