//! Hosting for everything outside `/api`.
//!
//! In production the built frontend is served from disk with an
//! `index.html` fallback so client-side routes resolve. In development the
//! same paths are forwarded to the frontend dev server instead.

pub mod proxy;
pub mod static_files;

use axum::Router;

use crate::config::Config;

/// Address of the frontend dev server used in development.
pub const DEV_SERVER_URL: &str = "http://localhost:5173";

/// Builds the router that answers non-API paths for the configured
/// environment.
pub fn router(config: &Config) -> Result<Router, reqwest::Error> {
    if config.environment.is_development() {
        tracing::info!(upstream = DEV_SERVER_URL, "proxying SPA requests to dev server");
        proxy::router(DEV_SERVER_URL)
    } else {
        tracing::info!(root = %config.spa_root.display(), "serving SPA from disk");
        Ok(static_files::router(&config.spa_root))
    }
}
