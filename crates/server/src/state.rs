use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use faq::FaqMatcher;
use std::sync::Arc;
use store::{StoreConfig, SupportStore};

/// Shared application state
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Support database (shared across requests)
    pub store: SupportStore,

    /// FAQ matcher (stateless, shared across requests)
    pub matcher: FaqMatcher,
}

impl ServerState {
    /// Create new server state: open and migrate the store, seed the stock
    /// FAQ set when configured, and build the matcher.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        if config.database_path.trim().is_empty() {
            return Err(ServerError::Config(
                "database_path must not be empty".to_string(),
            ));
        }

        let store_config = if config.database_path == ":memory:" {
            StoreConfig::in_memory()
        } else {
            StoreConfig::path(&config.database_path)
        };
        let store = SupportStore::open(store_config)?;

        if config.seed_faqs {
            let inserted = store.seed_default_faqs()?;
            if inserted > 0 {
                tracing::info!(inserted, "seeded stock FAQ entries");
            }
        }

        Ok(Self {
            config: Arc::new(config),
            store,
            matcher: FaqMatcher::default(),
        })
    }
}
