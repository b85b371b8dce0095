//! Application state for the web layer.

use crate::store::ClimateStore;

/// Shared application state.
///
/// Holds only the store handle; each request opens its own session.
#[derive(Clone)]
pub struct AppState {
    /// Observations database
    pub store: ClimateStore,
}

impl AppState {
    /// Create a new app state.
    pub fn new(store: ClimateStore) -> Self {
        Self { store }
    }
}
