use std::sync::Arc;
use std::time::Instant;

use crate::services::SearchProvider;

/// Shared application state
///
/// Everything here is read-only after startup; requests never coordinate
/// through it.
#[derive(Clone)]
pub struct AppState {
    pub search_provider: Arc<dyn SearchProvider>,
    pub started_at: Instant,
}

impl AppState {
    /// Creates state around the given search provider
    pub fn new(search_provider: Arc<dyn SearchProvider>) -> Self {
        Self {
            search_provider,
            started_at: Instant::now(),
        }
    }
}
