//! Application state for the web layer.

use std::sync::Arc;

use crate::network::RailNetwork;

/// Shared application state.
///
/// The network is immutable once loaded, so handlers share it without
/// locking.
#[derive(Clone)]
pub struct AppState {
    /// The loaded rail network
    pub network: Arc<RailNetwork>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: RailNetwork) -> Self {
        Self {
            network: Arc::new(network),
        }
    }
}
