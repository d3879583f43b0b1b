//! HTTP access to the items API.

use async_trait::async_trait;
use common::{ITEMS_PATH, Item};
use reqwest::Client;

use crate::Result;
use crate::error::FetchError;

/// Base URL of the API server the client talks to.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Something the view can load items from.
#[async_trait]
pub trait ItemSource: Send + Sync {
    async fn fetch_items(&self) -> Result<Vec<Item>>;
}

/// Fetches items from the API server.
#[derive(Debug, Clone)]
pub struct ApiService {
    client: Client,
    base_url: String,
}

impl ApiService {
    /// Creates a service talking to the server at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Full URL of the items resource.
    pub fn items_url(&self) -> String {
        format!("{}{}", self.base_url, ITEMS_PATH)
    }
}

impl Default for ApiService {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl ItemSource for ApiService {
    #[tracing::instrument(skip(self), fields(url = %self.items_url()))]
    async fn fetch_items(&self) -> Result<Vec<Item>> {
        let response = self
            .client
            .get(self.items_url())
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        tracing::debug!(%status, "items response received");
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        response.json().await.map_err(FetchError::Decode)
    }
}
