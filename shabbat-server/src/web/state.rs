//! Application state for the web layer.

use std::sync::Arc;

use crate::domain::CityCatalog;
use crate::hebcal::HebcalClient;

/// Shared application state.
///
/// Nothing in here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    /// The fixed city catalog
    pub catalog: CityCatalog,

    /// Upstream times provider
    pub hebcal: Arc<HebcalClient>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(catalog: CityCatalog, hebcal: HebcalClient) -> Self {
        Self {
            catalog,
            hebcal: Arc::new(hebcal),
        }
    }
}
