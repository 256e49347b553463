//! Admin Auth Gate
//!
//! A placeholder gate: one compiled-in credential pair and a persisted
//! sentinel whose presence means "logged in". No hashing, expiry, lockout or
//! rate limiting. Callers depend on [`Authenticator`] so a real
//! implementation can replace [`SessionGate`] without touching them.

use crate::storage::ContentStore;
use std::sync::Arc;

/// Fixed admin username
pub const ADMIN_USERNAME: &str = "admin";
/// Fixed admin password
pub const ADMIN_PASSWORD: &str = "admin";
/// Value stored under the session key while logged in
pub const SESSION_SENTINEL: &str = "mock-jwt-token";

/// Binary admin session
pub trait Authenticator: Send + Sync {
    /// Log in; `false` on wrong credentials, state unchanged
    fn login(&self, username: &str, password: &str) -> bool;

    /// Whether an admin session is active
    fn is_authenticated(&self) -> bool;

    /// End the session (no-op when logged out)
    fn logout(&self);
}

/// Sentinel-in-store session gate
#[derive(Clone)]
pub struct SessionGate {
    store: Arc<ContentStore>,
}

impl SessionGate {
    pub fn new(store: Arc<ContentStore>) -> Self {
        Self { store }
    }
}

impl Authenticator for SessionGate {
    fn login(&self, username: &str, password: &str) -> bool {
        if username != ADMIN_USERNAME || password != ADMIN_PASSWORD {
            tracing::warn!(username, "Admin login rejected");
            return false;
        }

        match self.store.set_session_token(SESSION_SENTINEL) {
            Ok(()) => {
                tracing::info!(username, "Admin logged in");
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to persist admin session");
                false
            }
        }
    }

    fn is_authenticated(&self) -> bool {
        self.store.session_token().is_some()
    }

    fn logout(&self) {
        if let Err(e) = self.store.clear_session_token() {
            tracing::error!(error = %e, "Failed to clear admin session");
            return;
        }
        tracing::info!("Admin logged out");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StorageConfig;
    use tempfile::tempdir;

    fn gate() -> SessionGate {
        SessionGate::new(Arc::new(ContentStore::in_memory()))
    }

    #[test]
    fn test_starts_logged_out() {
        assert!(!gate().is_authenticated());
    }

    #[test]
    fn test_login_logout_roundtrip() {
        let gate = gate();
        assert!(gate.login("admin", "admin"));
        assert!(gate.is_authenticated());

        gate.logout();
        assert!(!gate.is_authenticated());
    }

    #[test]
    fn test_wrong_credentials_leave_state_unchanged() {
        let gate = gate();
        assert!(!gate.login("x", "y"));
        assert!(!gate.is_authenticated());

        assert!(!gate.login("admin", "Admin"));
        assert!(!gate.login("admin ", "admin"));
        assert!(!gate.is_authenticated());

        assert!(gate.login("admin", "admin"));
        assert!(!gate.login("x", "y"));
        assert!(gate.is_authenticated());
    }

    #[test]
    fn test_logout_is_idempotent() {
        let gate = gate();
        gate.logout();
        gate.logout();
        assert!(!gate.is_authenticated());
    }

    #[test]
    fn test_session_survives_reopen() {
        let dir = tempdir().unwrap();
        let config = StorageConfig::new(dir.path());

        {
            let gate = SessionGate::new(Arc::new(ContentStore::open(&config).unwrap()));
            assert!(gate.login("admin", "admin"));
        }

        let gate = SessionGate::new(Arc::new(ContentStore::open(&config).unwrap()));
        assert!(gate.is_authenticated());
        gate.logout();

        let gate = SessionGate::new(Arc::new(ContentStore::open(&config).unwrap()));
        assert!(!gate.is_authenticated());
    }

    #[test]
    fn test_sentinel_value_persisted() {
        let store = Arc::new(ContentStore::in_memory());
        let gate = SessionGate::new(Arc::clone(&store));
        gate.login("admin", "admin");
        assert_eq!(store.session_token().as_deref(), Some(SESSION_SENTINEL));
    }
}
