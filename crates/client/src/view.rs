//! Items list view.

use common::Item;

use crate::service::ItemSource;

/// Lifecycle of the view's data.
///
/// `NotFetched` moves to exactly one of the other two on mount. Both are
/// terminal; there is no retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    NotFetched,
    Populated(Vec<Item>),
    Failed,
}

/// Fetches the item list once on mount and renders it.
pub struct ItemsView<S: ItemSource> {
    source: S,
    state: ViewState,
}

impl<S: ItemSource> ItemsView<S> {
    /// Creates an unmounted view with an empty list.
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: ViewState::NotFetched,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Items currently on display. Empty until a fetch succeeds.
    pub fn items(&self) -> &[Item] {
        match &self.state {
            ViewState::Populated(items) => items,
            ViewState::NotFetched | ViewState::Failed => &[],
        }
    }

    /// Requests the items from the source. Only the first call fetches;
    /// later calls leave the state alone.
    ///
    /// A failed fetch is logged and the list stays empty.
    pub async fn mount(&mut self) {
        if self.state != ViewState::NotFetched {
            tracing::debug!("view already mounted, skipping fetch");
            return;
        }

        match self.source.fetch_items().await {
            Ok(items) => {
                tracing::info!(count = items.len(), "items loaded");
                self.state = ViewState::Populated(items);
            }
            Err(err) => {
                tracing::error!(error = %err, "Error fetching items");
                self.state = ViewState::Failed;
            }
        }
    }

    /// Renders the view as HTML, one `<li>` per item keyed by position.
    pub fn render(&self) -> String {
        let mut html = String::from("<div class=\"App\"><h1>Items List</h1><ul>");
        for (index, item) in self.items().iter().enumerate() {
            html.push_str(&format!(
                "<li data-key=\"{index}\">{}</li>",
                escape_html(item.as_str())
            ));
        }
        html.push_str("</ul></div>");
        html
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
