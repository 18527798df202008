//! Session store.
//!
//! Trait and in-memory implementation for session storage, plus a
//! background task that expires idle sessions.

use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::session::Session;

/// Statistics about live sessions.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SessionStats {
    /// Total number of live sessions.
    pub total: usize,
}

/// Session store trait for pluggable storage backends.
pub trait SessionStore: Send + Sync {
    /// Create a fresh session with a unique id and register it.
    ///
    /// Every call returns a new session, never an existing one.
    fn new_session(&self) -> Session;

    /// Look up a session by id.
    fn find(&self, id: &str) -> Option<Session>;

    /// Remove a specific session by id.
    fn remove(&self, id: &str);

    /// Remove sessions idle longer than `max_idle`.
    /// Returns the number of sessions removed.
    fn cleanup(&self, max_idle: Duration) -> usize;

    /// Get session statistics.
    fn stats(&self) -> SessionStats;
}

/// In-memory session store using DashMap.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: DashMap<String, Session>,
}

impl InMemorySessionStore {
    /// Create a new in-memory session store.
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Create a new store wrapped in Arc for sharing.
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }
}

impl SessionStore for InMemorySessionStore {
    fn new_session(&self) -> Session {
        let id = Uuid::new_v4().to_string();
        let session = Session::new(id.clone());

        let _span = tracing::info_span!(
            "session.create",
            session_id = %id,
        )
        .entered();

        tracing::info!("Created new session");
        self.sessions.insert(id, session.clone());
        session
    }

    fn find(&self, id: &str) -> Option<Session> {
        self.sessions.get(id).map(|entry| entry.value().clone())
    }

    fn remove(&self, id: &str) {
        if self.sessions.remove(id).is_some() {
            tracing::info!(session_id = %id, "Session removed");
        }
    }

    fn cleanup(&self, max_idle: Duration) -> usize {
        let mut to_remove = Vec::new();

        for entry in self.sessions.iter() {
            if entry.value().is_expired(max_idle) {
                to_remove.push(entry.key().clone());
            }
        }

        let removed = to_remove.len();
        for id in to_remove {
            if self.sessions.remove(&id).is_some() {
                tracing::info!(session_id = %id, "Removed stale session");
            }
        }

        if removed > 0 {
            tracing::info!(
                removed,
                remaining = self.sessions.len(),
                "Session cleanup completed"
            );
        }

        removed
    }

    fn stats(&self) -> SessionStats {
        SessionStats {
            total: self.sessions.len(),
        }
    }
}

/// Spawn a background task that periodically cleans up stale sessions.
pub fn spawn_cleanup_task(
    store: Arc<dyn SessionStore>,
    interval: Duration,
    max_idle: Duration,
    cancel: tokio_util::sync::CancellationToken,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::info!("Session cleanup task shutting down");
                    break;
                }
                _ = ticker.tick() => {
                    store.cleanup(max_idle);
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_session_registers() {
        let store = InMemorySessionStore::new();
        let session = store.new_session();
        assert!(!session.id().is_empty());

        let found = store.find(session.id()).expect("session is registered");
        assert!(found.same_instance(&session));
        assert_eq!(store.stats().total, 1);
    }

    #[test]
    fn test_new_sessions_are_unique() {
        let store = InMemorySessionStore::new();
        let a = store.new_session();
        let b = store.new_session();

        assert_ne!(a.id(), b.id());
        assert!(!a.same_instance(&b));
        assert_eq!(store.stats().total, 2);
    }

    #[test]
    fn test_find_unknown_id() {
        let store = InMemorySessionStore::new();
        assert!(store.find("nope").is_none());
    }

    #[test]
    fn test_remove() {
        let store = InMemorySessionStore::new();
        let session = store.new_session();

        store.remove(session.id());
        assert!(store.find(session.id()).is_none());
        assert_eq!(store.stats().total, 0);
    }

    #[test]
    fn test_cleanup_removes_idle_sessions() {
        let store = InMemorySessionStore::new();
        let _session = store.new_session();
        std::thread::sleep(Duration::from_millis(5));

        let removed = store.cleanup(Duration::ZERO);
        assert_eq!(removed, 1);
        assert_eq!(store.stats().total, 0);
    }

    #[test]
    fn test_cleanup_keeps_recent_sessions() {
        let store = InMemorySessionStore::new();
        let _session = store.new_session();

        let removed = store.cleanup(Duration::from_secs(3600));
        assert_eq!(removed, 0);
        assert_eq!(store.stats().total, 1);
    }

    #[tokio::test]
    async fn test_cleanup_task_expires_and_shuts_down() {
        let store = InMemorySessionStore::new_shared();
        let _session = store.new_session();

        let cancel = tokio_util::sync::CancellationToken::new();
        let handle = spawn_cleanup_task(
            store.clone(),
            Duration::from_millis(10),
            Duration::ZERO,
            cancel.clone(),
        );

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(store.stats().total, 0);

        cancel.cancel();
        handle.await.expect("cleanup task exits cleanly");
    }
}
