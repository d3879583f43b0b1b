//! Mounts the items view against the local API server and prints its markup.

use client::{ApiService, ItemsView};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut view = ItemsView::new(ApiService::default());
    view.mount().await;

    println!("{}", view.render());
}
