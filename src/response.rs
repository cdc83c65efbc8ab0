//! Response helpers. Payloads are returned bare, without an envelope.

use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// `{"detail": "..."}` body used for errors and delete confirmations.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq, Eq)]
pub struct Detail {
    pub detail: String,
}

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn detail(message: impl Into<String>) -> (StatusCode, Json<Detail>) {
    ok(Detail {
        detail: message.into(),
    })
}
