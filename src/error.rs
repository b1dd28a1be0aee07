// src/error.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

use crate::repository::StorageError;

/// Global Application Error Enum.
/// The closed set of failures a handler can report to a client.
#[derive(Debug)]
pub enum AppError {
    // 400 Bad Request: body is not a JSON object
    BadRequest,

    // 404 Not Found
    NotFound { entity: &'static str, id: String },

    // 422 Unprocessable Entity: lists every missing field
    UnprocessableEntity(Vec<String>),

    // 500 Internal Server Error, detail is logged only
    InternalServerError(String),
}

impl AppError {
    pub fn not_found(entity: &'static str, id: impl fmt::Display) -> Self {
        AppError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Client-visible message for each kind.
impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest => write!(f, "problems parsing request body"),
            AppError::NotFound { entity, id } => write!(f, "{} with id {} not found", entity, id),
            AppError::UnprocessableEntity(fields) => write!(
                f,
                "required field(s) missing from request body: {}",
                fields.join(", ")
            ),
            AppError::InternalServerError(_) => write!(f, "internal server error"),
        }
    }
}

impl std::error::Error for AppError {}

/// Uniform error envelope.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Always `false`.
    pub success: bool,
    pub message: String,
    /// Numeric HTTP status code, repeated in the body.
    pub error: u16,
}

/// Implements `IntoResponse` for `AppError`.
/// This is the only place an error body is built.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::InternalServerError(detail) = &self {
            tracing::error!("Internal Server Error: {}", detail);
        }

        let status = self.status();
        let body = Json(ErrorBody {
            success: false,
            message: self.to_string(),
            error: status.as_u16(),
        });

        (status, body).into_response()
    }
}

/// Any storage failure surfaces as a 500.
/// Allows using `?` operator on repository calls.
impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        AppError::InternalServerError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        tracing::debug!("Rejected request body: {}", err);
        AppError::BadRequest
    }
}
