use std::sync::Arc;

use storage::Store;

use crate::config::Config;

/// Request-independent settings read once at startup
#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub max_page_limit: u32,
    /// JSON names of the athlete fields a PATCH may change
    pub athlete_mutable_fields: Vec<String>,
}

impl From<&Config> for ApiSettings {
    fn from(config: &Config) -> Self {
        Self {
            max_page_limit: config.max_page_limit,
            athlete_mutable_fields: config.athlete_mutable_fields.clone(),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub settings: Arc<ApiSettings>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, settings: ApiSettings) -> Self {
        Self {
            store,
            settings: Arc::new(settings),
        }
    }

    pub fn store(&self) -> &dyn Store {
        self.store.as_ref()
    }
}
