use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use color_eyre::Result;
use tokio::sync::RwLock;

use super::SessionState;

/// Storage for quiz sessions, keyed by the id carried in the session cookie.
pub trait SessionStore: Send + Sync {
    fn get(
        &self,
        session_id: &str,
    ) -> impl std::future::Future<Output = Result<Option<SessionState>>> + Send;

    /// Inserts or overwrites the state for `session_id`.
    fn set(
        &self,
        session_id: &str,
        state: SessionState,
    ) -> impl std::future::Future<Output = Result<()>> + Send;

    fn clear(&self, session_id: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}

struct Entry {
    state: SessionState,
    touched_at: Instant,
}

/// In-process store. Reads and writes both count as activity; sessions idle
/// for longer than `ttl` are treated as gone and swept out on the next write.
#[derive(Clone)]
pub struct MemorySessionStore {
    sessions: Arc<RwLock<HashMap<String, Entry>>>,
    ttl: Duration,
}

impl MemorySessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl SessionStore for MemorySessionStore {
    async fn get(&self, session_id: &str) -> Result<Option<SessionState>> {
        let mut sessions = self.sessions.write().await;
        Ok(sessions
            .get_mut(session_id)
            .filter(|entry| entry.touched_at.elapsed() < self.ttl)
            .map(|entry| {
                entry.touched_at = Instant::now();
                entry.state.clone()
            }))
    }

    async fn set(&self, session_id: &str, state: SessionState) -> Result<()> {
        let mut sessions = self.sessions.write().await;

        let before = sessions.len();
        sessions.retain(|_, entry| entry.touched_at.elapsed() < self.ttl);
        let expired = before - sessions.len();
        if expired > 0 {
            tracing::debug!("dropped {expired} expired quiz sessions");
        }

        sessions.insert(
            session_id.to_string(),
            Entry {
                state,
                touched_at: Instant::now(),
            },
        );
        Ok(())
    }

    async fn clear(&self, session_id: &str) -> Result<()> {
        self.sessions.write().await.remove(session_id);
        Ok(())
    }
}
