use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use payloads::ErrorBody;
use thiserror::Error;

pub const BODY_FIELDS_REQUIRED: &str = "Business name and location are required";
pub const QUERY_FIELDS_REQUIRED: &str =
    "Business name and location are required as query parameters";
pub const ENDPOINT_NOT_FOUND: &str = "Endpoint not found";
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(&'static str),

    #[error("Endpoint not found")]
    NotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound => (StatusCode::NOT_FOUND, ENDPOINT_NOT_FOUND),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR),
        };

        (status, Json(ErrorBody::new(message))).into_response()
    }
}

/// Failures that stop the server from starting.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Invalid {key} value: {message}")]
    Config { key: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
