//! Shared application state.

use std::sync::Arc;

use eventide_core::EventStore;

/// State handed to every request handler. Cloning is cheap (one Arc).
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EventStore>,
}
