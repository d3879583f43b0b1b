//! HTTP API server and SPA host for the items scaffold.
//!
//! Serves the item catalog under `/api`, with structured logging (tracing)
//! and Prometheus metrics. Every other path belongs to the frontend: served
//! from disk in production, proxied to the dev server in development.

pub mod config;
pub mod error;
pub mod routes;
pub mod spa;

use axum::Router;
use axum::http::{HeaderValue, header};
use axum::routing::{any, get};
use common::{API_PREFIX, ITEMS_PATH};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use config::Config;

/// HSTS policy sent in production: 30 days, matching common framework defaults.
const HSTS_POLICY: &str = "max-age=2592000";

/// Creates the Axum application router for the given configuration.
///
/// Fails only if the dev server proxy client cannot be built.
pub fn create_app(
    config: &Config,
    metrics_handle: PrometheusHandle,
) -> Result<Router, reqwest::Error> {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::render))
        .with_state(metrics_handle);

    let app = Router::new()
        .route("/health", get(routes::health::check))
        .route(ITEMS_PATH, get(routes::items::list))
        .route(API_PREFIX, any(routes::api_not_found))
        .route(&format!("{API_PREFIX}/"), any(routes::api_not_found))
        .route(&format!("{API_PREFIX}/{{*rest}}"), any(routes::api_not_found))
        .merge(metrics_router)
        .fallback_service(spa::router(config)?)
        .layer(CatchPanicLayer::custom(error::panic_handler(
            config.environment.is_development(),
        )))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    let app = if config.environment.is_development() {
        app
    } else {
        app.layer(SetResponseHeaderLayer::if_not_present(
            header::STRICT_TRANSPORT_SECURITY,
            HeaderValue::from_static(HSTS_POLICY),
        ))
    };

    Ok(app
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid)))
}
