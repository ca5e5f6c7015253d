// --- File: crates/salonify_common/src/http.rs ---
use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::error::{HttpStatusCode, SalonifyError};

/// Extension trait for SalonifyError to convert it to an Axum HTTP response.
pub trait IntoHttpResponse {
    /// Converts the error into an Axum HTTP response.
    fn into_http_response(self) -> Response;
}

impl IntoHttpResponse for SalonifyError {
    fn into_http_response(self) -> Response {
        let status_code =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status_code.is_server_error() {
            error!("{}", self);
        }

        let body = Json(json!({
            "error": self.public_message(),
            "code": status_code.as_u16(),
        }));

        (status_code, body).into_response()
    }
}

impl IntoResponse for SalonifyError {
    fn into_response(self) -> Response {
        self.into_http_response()
    }
}

impl From<JsonRejection> for SalonifyError {
    fn from(rejection: JsonRejection) -> Self {
        SalonifyError::ValidationError(rejection.body_text())
    }
}

impl From<QueryRejection> for SalonifyError {
    fn from(rejection: QueryRejection) -> Self {
        SalonifyError::ValidationError(rejection.body_text())
    }
}

/// Fallback for routes hit with a method they do not serve.
pub async fn method_not_allowed() -> SalonifyError {
    SalonifyError::MethodNotAllowed("Unsupported method".to_string())
}
