// In-memory session store for the dashboard login.
//
// Sessions are process-local, like the rest of the state: each worker
// process keeps its own table and nothing is persisted.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Name of the HttpOnly cookie carrying the session token.
pub const SESSION_COOKIE: &str = "qt_session";

#[derive(Debug, Clone)]
pub struct Session {
    pub user: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, Session>>>,
}

impl SessionStore {
    /// Open a session for `user` and return the opaque token.
    pub async fn create(&self, user: &str) -> String {
        let token = Uuid::new_v4().to_string();
        let mut guard = self.inner.write().await;
        guard.insert(
            token.clone(),
            Session {
                user: user.to_string(),
                created_at: chrono::Utc::now(),
            },
        );
        token
    }

    pub async fn get(&self, token: &str) -> Option<Session> {
        let guard = self.inner.read().await;
        guard.get(token).cloned()
    }

    pub async fn remove(&self, token: &str) -> Option<Session> {
        let mut guard = self.inner.write().await;
        guard.remove(token)
    }
}
