use std::sync::Arc;

use lectern_common::storage::ObjectStore;

use crate::catalog::VideoCatalog;
use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub object_store: Arc<dyn ObjectStore>,
    pub catalog: Arc<dyn VideoCatalog>,
}
