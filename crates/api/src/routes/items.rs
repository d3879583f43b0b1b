//! Items endpoint.

use axum::Json;
use common::Item;

/// GET /api/items — returns the fixed item catalog.
///
/// Takes no input; every call yields the same three items in the same order.
#[tracing::instrument]
pub async fn list() -> Json<Vec<Item>> {
    metrics::counter!("items_requests_total").increment(1);
    let items = common::catalog();
    tracing::debug!(count = items.len(), "serving item catalog");
    Json(items)
}
