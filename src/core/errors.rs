use spin_sdk::http::Response;
use thiserror::Error;

use crate::core::helpers::json_response;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Error: {0}")]
    InternalError(String),
}

impl ApiError {
    pub fn status(&self) -> u16 {
        match self {
            ApiError::NotFound(_) => http::StatusCode::NOT_FOUND.as_u16(),
            ApiError::InternalError(_) => http::StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
        }
    }

    fn message(&self) -> &str {
        match self {
            ApiError::NotFound(msg) | ApiError::InternalError(msg) => msg,
        }
    }
}

impl From<ApiError> for Response {
    fn from(err: ApiError) -> Self {
        json_response(err.status(), &serde_json::json!({ "error": err.message() }))
    }
}

// Internal failures surface as 500s without leaking details.
impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        tracing::error!(error = %err, "internal error");
        ApiError::InternalError("Internal server error".to_string())
    }
}
