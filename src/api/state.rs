//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use crate::auth::{Authenticator, SessionGate};
use crate::editor::{ConfigDraft, ConfigEditor};
use crate::leads::LeadCapture;
use crate::notify::NotificationSink;
use crate::storage::ContentStore;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Content store (services, posts, leads, config)
    pub store: Arc<ContentStore>,
    /// Contact-form write path
    pub capture: LeadCapture,
    /// Site configuration editor
    pub editor: ConfigEditor,
    /// Admin gate
    pub auth: Arc<dyn Authenticator>,
    /// Admin's uncommitted configuration edits
    pub draft: Arc<RwLock<Option<ConfigDraft>>>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create state with the default session gate
    pub fn new(
        store: Arc<ContentStore>,
        sink: Arc<dyn NotificationSink>,
        config: ApiConfig,
    ) -> Self {
        let auth = Arc::new(SessionGate::new(Arc::clone(&store)));
        Self::with_auth(store, sink, auth, config)
    }

    /// Create state with a custom authenticator
    pub fn with_auth(
        store: Arc<ContentStore>,
        sink: Arc<dyn NotificationSink>,
        auth: Arc<dyn Authenticator>,
        config: ApiConfig,
    ) -> Self {
        Self {
            capture: LeadCapture::new(Arc::clone(&store), sink),
            editor: ConfigEditor::new(Arc::clone(&store)),
            store,
            auth,
            draft: Arc::new(RwLock::new(None)),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8090,
            request_timeout_ms: 30_000,
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::LogSink;

    #[test]
    fn test_api_config_addr() {
        let config = ApiConfig::new("127.0.0.1", 9000);
        assert_eq!(config.addr(), "127.0.0.1:9000");
        assert_eq!(config.request_timeout_ms, ApiConfig::default().request_timeout_ms);
    }

    #[test]
    fn test_state_shares_one_store() {
        let store = Arc::new(ContentStore::in_memory());
        let state = AppState::new(
            Arc::clone(&store),
            Arc::new(LogSink),
            ApiConfig::new("127.0.0.1", 0),
        );

        assert!(state.auth.login("admin", "admin"));
        assert!(store.session_token().is_some());
        assert_eq!(state.config.port, 0);
    }
}
