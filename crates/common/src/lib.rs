//! Shared types for the items scaffold.
//!
//! Both the API server and the client view depend on this crate so the
//! wire shape of an [`Item`] and the route paths are defined once.

pub mod types;

pub use types::{API_PREFIX, ITEM_NAMES, ITEMS_PATH, Item, catalog};
