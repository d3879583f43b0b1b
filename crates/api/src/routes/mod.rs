//! HTTP route handlers.

pub mod health;
pub mod items;
pub mod metrics;

use axum::http::Uri;

use crate::error::ApiError;

/// Fallback for `/api/*` paths with no matching route. Keeps unknown API
/// calls from falling through to the SPA.
pub async fn api_not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no API route for {}", uri.path()))
}
