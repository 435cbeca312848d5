//! Application state shared across all request handlers.

use std::sync::Arc;

use crate::config::Config;
use crate::store::PostStore;

/// Shared application state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Blog entry store.
    pub store: PostStore,

    /// Application configuration.
    pub config: Arc<Config>,
}

impl AppState {
    /// Create a new application state from configuration, opening the
    /// post store at the configured path.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let store = if config.db_path == ":memory:" {
            PostStore::open_in_memory()?
        } else {
            PostStore::open(&config.db_path)?
        };

        tracing::info!(db_path = %config.db_path, "post store opened");

        Ok(Self {
            store,
            config: Arc::new(config),
        })
    }
}
