//! Application state shared across all request handlers.

use crate::server::data::store::Store;

/// Shared resources handed to every handler through axum's state extraction.
///
/// Cloning is cheap, `Store` is reference counted.
#[derive(Clone)]
pub struct AppState {
    /// Campaigns, queues and routes served by the ajax controller.
    pub store: Store,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}
