//! API error types with HTTP response mapping.

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found.
    NotFound(String),
    /// The frontend dev server could not be reached or answered garbage.
    BadGateway(String),
    /// The request needs a capability this server does not offer.
    NotImplemented(String),
    /// Internal server error.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::NotImplemented(msg) => (StatusCode::NOT_IMPLEMENTED, msg),
            ApiError::BadGateway(msg) => {
                tracing::error!(error = %msg, "upstream request failed");
                (StatusCode::BAD_GATEWAY, msg)
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        error_body(status, message)
    }
}

fn error_body(status: StatusCode, message: String) -> Response {
    let body = serde_json::json!({ "error": message });
    (status, axum::Json(body)).into_response()
}

/// Builds the response handler used by `CatchPanicLayer`.
///
/// With `expose_detail` set the panic message is returned to the caller,
/// otherwise the body is generic and the message only reaches the log.
pub fn panic_handler(
    expose_detail: bool,
) -> impl Fn(Box<dyn Any + Send + 'static>) -> Response + Clone + Send + Sync + 'static {
    move |payload| {
        let detail = panic_message(payload.as_ref());
        tracing::error!(panic = %detail, "handler panicked");

        let message = if expose_detail {
            format!("handler panicked: {detail}")
        } else {
            "internal server error".to_string()
        };
        error_body(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    }
}
