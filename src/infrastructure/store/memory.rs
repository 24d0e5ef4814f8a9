use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::{errors::StoreError, repositories::local_store::LocalStore};

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
}

/// Writes between sweeps of expired entries.
const SWEEP_EVERY: usize = 128;

/// Process-local store used when no Redis is configured, and in tests.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: DashMap<String, Entry>,
    writes: AtomicUsize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.entries.iter().filter(|e| !e.is_expired(now)).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every expired entry, including keys that are never read again.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now));
        before.saturating_sub(self.entries.len())
    }
}

#[async_trait]
impl LocalStore for InMemoryStore {
    async fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        let now = Instant::now();
        let value = match self.entries.get(key) {
            Some(entry) if !entry.is_expired(now) => Some(entry.value.clone()),
            Some(_) => None,
            None => return Ok(None),
        };
        if value.is_none() {
            self.entries.remove_if(key, |_, entry| entry.is_expired(now));
        }
        Ok(value)
    }

    async fn set_raw(&self, key: &str, value: String, ttl: Option<Duration>) -> Result<(), StoreError> {
        let expires_at = ttl.map(|ttl| Instant::now() + ttl);
        self.entries.insert(key.to_string(), Entry { value, expires_at });

        if self.writes.fetch_add(1, Ordering::Relaxed) % SWEEP_EVERY == SWEEP_EVERY - 1 {
            let purged = self.purge_expired();
            if purged > 0 {
                tracing::debug!("Purged {} expired store entries", purged);
            }
        }
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn expired_entries_are_not_returned() {
        let store = InMemoryStore::new();
        store.set_raw("k", "v".into(), Some(Duration::ZERO)).await.unwrap();
        store.set_raw("durable", "v".into(), None).await.unwrap();

        assert_eq!(store.get_raw("k").await.unwrap(), None);
        assert_eq!(store.get_raw("durable").await.unwrap(), Some("v".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn remove_of_missing_key_is_ok() {
        let store = InMemoryStore::new();
        assert!(store.remove("nothing").await.is_ok());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn writes_sweep_entries_nobody_reads_again() {
        let store = InMemoryStore::new();
        for i in 0..SWEEP_EVERY - 1 {
            store
                .set_raw(&format!("stale-{}", i), "v".into(), Some(Duration::ZERO))
                .await
                .unwrap();
        }
        assert_eq!(store.entries.len(), SWEEP_EVERY - 1);

        store.set_raw("fresh", "v".into(), None).await.unwrap();

        assert_eq!(store.entries.len(), 1);
        assert_eq!(store.get_raw("fresh").await.unwrap(), Some("v".to_string()));
    }

    #[test]
    fn purge_reports_how_many_entries_expired() {
        let store = InMemoryStore::new();
        let now = Instant::now();
        store.entries.insert("old".into(), Entry { value: "v".into(), expires_at: Some(now) });
        store.entries.insert("kept".into(), Entry { value: "v".into(), expires_at: None });

        assert_eq!(store.purge_expired(), 1);
        assert_eq!(store.len(), 1);
    }
}
