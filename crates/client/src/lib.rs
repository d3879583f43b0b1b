//! Client view for the item catalog.
//!
//! - [`ItemSource`] abstracts where items come from
//! - [`ApiService`] fetches them from the API server over HTTP
//! - [`ItemsView`] fetches once on mount and renders the result as a list

pub mod error;
pub mod service;
pub mod view;

pub use error::{FetchError, Result};
pub use service::{ApiService, DEFAULT_BASE_URL, ItemSource};
pub use view::{ItemsView, ViewState};
