//! Error responses.
//!
//! Failures leave the server as `{"error": "<message>"}` with a matching
//! status code, the shape clients decode.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use catalog_sdk::ErrorBody;
use thiserror::Error;

/// Handler failure.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Product not found")]
    NotFound,

    #[error("Name and Price are required fields")]
    MissingFields,

    /// Body could not be read as the expected JSON.
    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MissingFields | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorBody::new(self.to_string()))).into_response()
    }
}
