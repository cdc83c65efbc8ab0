//! Typed errors and HTTP mapping.

use crate::response::Detail;
use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Item not found")]
    NotFound,
    #[error("{0}")]
    Validation(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    /// Request rejected by the transport layer with its own status (413, 415, ...).
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Db(sqlx::Error::RowNotFound) => StatusCode::NOT_FOUND,
            AppError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Rejected { status, .. } => *status,
        }
    }
}

/// Only malformed or mistyped JSON is a validation failure; size and
/// content-type rejections keep axum's status.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
                AppError::Validation(rejection.body_text())
            }
            other => AppError::Rejected {
                status: other.status(),
                message: other.body_text(),
            },
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        match rejection {
            PathRejection::FailedToDeserializePathParams(_) => {
                AppError::Validation(rejection.body_text())
            }
            other => AppError::Rejected {
                status: other.status(),
                message: other.body_text(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match &self {
            AppError::Db(sqlx::Error::RowNotFound) => AppError::NotFound.to_string(),
            AppError::Db(_) => {
                tracing::error!(error = %self, "request failed");
                "Internal Server Error".to_string()
            }
            _ => self.to_string(),
        };
        (status, Json(Detail { detail })).into_response()
    }
}
