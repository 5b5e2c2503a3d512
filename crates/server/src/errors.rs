use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::employee::EmployeeError;
use thiserror::Error;
use tracing::error;

/// JSON error body: `{"error": <title>, "message": <detail>}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub message: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, message: Option<String>) -> Self {
        Self { status, error, message }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({"error": self.error, "message": self.message});
        (self.status, Json(body)).into_response()
    }
}

impl From<EmployeeError> for JsonApiError {
    fn from(e: EmployeeError) -> Self {
        match e {
            EmployeeError::DuplicateEmail(_) => JsonApiError::new(StatusCode::CONFLICT, "Conflict", Some(e.to_string())),
            EmployeeError::NotFound(_) => JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(e.to_string())),
            EmployeeError::Storage(_) => {
                // Storage details stay in the logs
                error!(code = e.code(), err = %e, "employee storage failure");
                JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", Some("internal server error".into()))
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
}
