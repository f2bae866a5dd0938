use std::sync::Arc;

use super::data::{DataSource, MockDataSource};

/// Shared handler state. Built once in `main` and handed to the router.
#[derive(Clone)]
pub struct AppState {
    pub data: Arc<dyn DataSource>,
}

impl AppState {
    pub fn new(data: impl DataSource + 'static) -> Self {
        Self {
            data: Arc::new(data),
        }
    }

    /// Empty in-memory store, for tests
    pub fn in_memory() -> Self {
        Self::new(MockDataSource::default())
    }
}
