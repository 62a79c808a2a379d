use folio_ai::{DescriptionGenerator, RuntimeSettings};

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared handles passed to every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub generator: Arc<DescriptionGenerator>,
    /// Same flag the generator reads
    pub settings: RuntimeSettings,
}

impl AppState {
    pub fn new(pool: SqlitePool, generator: DescriptionGenerator) -> Self {
        let settings = generator.settings().clone();
        Self {
            pool,
            generator: Arc::new(generator),
            settings,
        }
    }
}
