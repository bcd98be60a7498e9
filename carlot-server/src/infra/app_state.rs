use std::{fmt, sync::Arc};

use carlot_core::SqliteCatalogRepository;

use crate::infra::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<SqliteCatalogRepository>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(
        catalog: Arc<SqliteCatalogRepository>,
        config: Arc<Config>,
    ) -> Self {
        Self { catalog, config }
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
