//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::repository::FullRepository;
use crate::models::{GridTopology, SlotCatalog};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Registry storage
    pub repository: Arc<dyn FullRepository>,
    pub catalog: Arc<SlotCatalog>,
    pub topology: Arc<GridTopology>,
}

impl AppState {
    /// State over the institution's standard catalog and grid.
    pub fn new(repository: Arc<dyn FullRepository>) -> Self {
        Self::with_grid(
            repository,
            SlotCatalog::standard().clone(),
            GridTopology::standard().clone(),
        )
    }

    pub fn with_grid(
        repository: Arc<dyn FullRepository>,
        catalog: SlotCatalog,
        topology: GridTopology,
    ) -> Self {
        Self {
            repository,
            catalog: Arc::new(catalog),
            topology: Arc::new(topology),
        }
    }
}
