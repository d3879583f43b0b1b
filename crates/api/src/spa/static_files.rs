//! Static file serving for the built SPA.

use std::path::Path;

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

/// Entry document of the SPA, relative to its root.
pub const INDEX_FILE: &str = "index.html";

/// Serves files under `root`, answering unknown paths with the SPA entry
/// document so client-side routing works on deep links.
pub fn router(root: &Path) -> Router {
    let index = root.join(INDEX_FILE);
    if !index.is_file() {
        tracing::warn!(path = %index.display(), "SPA entry document not found");
    }

    let serve = ServeDir::new(root).fallback(ServeFile::new(index));
    Router::new().fallback_service(serve)
}
