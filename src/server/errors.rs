use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors surfaced to HTTP clients
///
/// Only input validation ever reaches a client; crawl-internal failures are
/// absorbed per task and never escalate to a response.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A request parameter failed validation; the message names the field
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
        };
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let response = ApiError::validation("depth must be positive").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_message_is_preserved() {
        let error = ApiError::validation("urlString must not be blank");
        assert_eq!(error.to_string(), "urlString must not be blank");
    }
}
