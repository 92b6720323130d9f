//! Client-side error type.

use reqwest::StatusCode;
use thiserror::Error;

use crate::types::ErrorBody;

/// Errors returned by [`ProductClient`](crate::ProductClient) calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response whose body carried an `error` message.
    #[error("{message}")]
    Server { status: StatusCode, message: String },

    /// Non-2xx response without a usable `error` message.
    #[error("HTTP error! status: {}", .0.as_u16())]
    Status(StatusCode),

    /// The request never produced a response.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// A success response whose body could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Build the error for a failed response from its status and raw body.
    ///
    /// The server's `error` field is used verbatim when present and non-empty.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(ErrorBody {
                error: Some(message),
            }) if !message.is_empty() => ApiError::Server { status, message },
            _ => ApiError::Status(status),
        }
    }

    /// HTTP status of the failed response, if one was received.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            ApiError::Status(status) => Some(*status),
            ApiError::Transport(e) => e.status(),
            ApiError::Decode(_) => None,
        }
    }

    /// Message suitable for showing to a user.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            "Unknown error".to_string()
        } else {
            message
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_used_verbatim() {
        let err = ApiError::from_response(
            StatusCode::BAD_REQUEST,
            r#"{"error": "Name and Price are required fields"}"#,
        );
        assert_eq!(err.user_message(), "Name and Price are required fields");
        assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
    }

    #[test]
    fn test_fallback_to_status_message() {
        let not_json = ApiError::from_response(StatusCode::BAD_GATEWAY, "<html>oops</html>");
        assert_eq!(not_json.user_message(), "HTTP error! status: 502");

        let no_field = ApiError::from_response(StatusCode::NOT_FOUND, r#"{"detail": "gone"}"#);
        assert_eq!(no_field.user_message(), "HTTP error! status: 404");

        let empty = ApiError::from_response(StatusCode::CONFLICT, r#"{"error": ""}"#);
        assert_eq!(empty.user_message(), "HTTP error! status: 409");
    }
}
