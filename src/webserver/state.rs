/// Shared application state for the webserver
///
/// Holds the immutable configuration and the token service. Nothing in
/// here changes while requests are served.
use std::sync::Arc;

use crate::apis::{DexScreenerClient, PoolSource};
use crate::config::Config;
use crate::tokens::TokenService;

/// Shared application state passed to all route handlers
#[derive(Clone)]
pub struct AppState {
    /// Service configuration
    pub config: Arc<Config>,

    /// Token lookups (single and batch)
    pub tokens: TokenService,

    /// Server startup time
    pub startup_time: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    /// Create application state around an explicit pool source
    pub fn new(config: Config, source: Arc<dyn PoolSource>) -> Self {
        Self {
            config: Arc::new(config),
            tokens: TokenService::new(source),
            startup_time: chrono::Utc::now(),
        }
    }

    /// Create application state backed by the DexScreener client
    pub fn from_config(config: Config) -> Result<Self, String> {
        let client = DexScreenerClient::new(&config.upstream)?;
        Ok(Self::new(config, Arc::new(client)))
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        (chrono::Utc::now() - self.startup_time)
            .num_seconds()
            .max(0) as u64
    }
}
