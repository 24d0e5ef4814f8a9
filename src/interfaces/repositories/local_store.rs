use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

use crate::errors::StoreError;

const KEY_PREFIX: &str = "jobfinder";

/// How long a key should outlive the request that wrote it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persistence {
    /// Kept until explicitly cleared.
    Durable,
    /// Expires after the configured session TTL.
    Session,
}

/// Every key the tracker writes, scoped per user.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StoreKey {
    DismissedJobs(Uuid),
    PendingConfirmation(Uuid),
    RecentlyViewed(Uuid),
}

impl StoreKey {
    pub fn as_key(&self) -> String {
        let (name, user_id) = match self {
            StoreKey::DismissedJobs(id) => ("dismissed_job_applications", id),
            StoreKey::PendingConfirmation(id) => ("last_applied_job", id),
            StoreKey::RecentlyViewed(id) => ("recently_viewed_jobs", id),
        };
        format!("{KEY_PREFIX}:{user_id}:{name}")
    }

    pub fn persistence(&self) -> Persistence {
        match self {
            StoreKey::RecentlyViewed(_) => Persistence::Session,
            StoreKey::DismissedJobs(_) | StoreKey::PendingConfirmation(_) => Persistence::Durable,
        }
    }
}

/// String key-value storage for small client-side markers.
#[async_trait]
pub trait LocalStore: Send + Sync {
    async fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError>;
    async fn set_raw(&self, key: &str, value: String, ttl: Option<Duration>) -> Result<(), StoreError>;
    async fn remove(&self, key: &str) -> Result<(), StoreError>;
    async fn ping(&self) -> Result<(), StoreError>;
}

/// JSON-typed view over a [`LocalStore`] that applies the session TTL to
/// session-scoped keys.
pub struct TypedStore<S: ?Sized> {
    inner: Arc<S>,
    session_ttl: Duration,
}

impl<S: ?Sized> Clone for TypedStore<S> {
    fn clone(&self) -> Self {
        TypedStore {
            inner: Arc::clone(&self.inner),
            session_ttl: self.session_ttl,
        }
    }
}

impl<S> TypedStore<S>
where
    S: LocalStore + ?Sized,
{
    pub fn new(inner: Arc<S>, session_ttl: Duration) -> Self {
        TypedStore { inner, session_ttl }
    }

    pub async fn get<T: DeserializeOwned>(&self, key: &StoreKey) -> Result<Option<T>, StoreError> {
        match self.inner.get_raw(&key.as_key()).await? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    pub async fn set<T: Serialize + Sync>(&self, key: &StoreKey, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)?;
        let ttl = match key.persistence() {
            Persistence::Durable => None,
            Persistence::Session => Some(self.session_ttl),
        };
        self.inner.set_raw(&key.as_key(), raw, ttl).await
    }

    pub async fn clear(&self, key: &StoreKey) -> Result<(), StoreError> {
        self.inner.remove(&key.as_key()).await
    }

    pub async fn ping(&self) -> Result<(), StoreError> {
        self.inner.ping().await
    }
}
