//! Session handle.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Server-side, per-client state correlated across requests.
///
/// `Session` is a cheap handle; clones share the same underlying state, so
/// every component that receives the session during a request observes the
/// same attributes. Use [`same_instance`](Session::same_instance) to check
/// whether two handles refer to the same session.
#[derive(Debug, Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

#[derive(Debug)]
struct SessionInner {
    id: String,
    created_at: Instant,
    // Milliseconds since created_at, so shared handles can touch without
    // locking.
    last_seen_ms: AtomicU64,
    attributes: DashMap<String, Value>,
}

impl Session {
    pub(crate) fn new(id: String) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                id,
                created_at: Instant::now(),
                last_seen_ms: AtomicU64::new(0),
                attributes: DashMap::new(),
            }),
        }
    }

    /// Unique session identifier.
    pub fn id(&self) -> &str {
        &self.inner.id
    }

    /// When the session was created.
    pub fn created_at(&self) -> Instant {
        self.inner.created_at
    }

    /// Time since the last recorded activity.
    pub fn idle_duration(&self) -> Duration {
        let last_seen = Duration::from_millis(self.inner.last_seen_ms.load(Ordering::Relaxed));
        self.inner.created_at.elapsed().saturating_sub(last_seen)
    }

    /// Record activity now.
    pub fn touch(&self) {
        let elapsed = self.inner.created_at.elapsed().as_millis() as u64;
        self.inner.last_seen_ms.store(elapsed, Ordering::Relaxed);
    }

    /// Whether the session has been idle longer than `max_idle`.
    pub fn is_expired(&self, max_idle: Duration) -> bool {
        self.idle_duration() > max_idle
    }

    /// Store an attribute value under `key`, replacing any previous value.
    pub fn put(&self, key: impl Into<String>, value: impl Into<Value>) {
        self.inner.attributes.insert(key.into(), value.into());
    }

    /// Get the attribute under `key`, deserialized as `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.inner
            .attributes
            .get(key)
            .and_then(|entry| serde_json::from_value(entry.value().clone()).ok())
    }

    /// Whether an attribute exists under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.inner.attributes.contains_key(key)
    }

    /// Remove the attribute under `key`. Returns true if one existed.
    pub fn remove(&self, key: &str) -> bool {
        self.inner.attributes.remove(key).is_some()
    }

    /// Whether two handles refer to the same session state.
    pub fn same_instance(&self, other: &Session) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
