use std::sync::Arc;

use crate::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ResumeStore>,
}

impl AppState {
    pub fn new(store: ResumeStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
