use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::{SessionStore, StoreError, StoreKey};

/// In-memory session storage using a HashMap behind a RwLock.
///
/// Suitable for tests and for processes that don't need the session to survive a restart.
#[derive(Default)]
pub struct InMemorySessionStore {
    values: RwLock<HashMap<StoreKey, String>>,
}

impl InMemorySessionStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store preloaded with the given values.
    pub fn with_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = (StoreKey, String)>,
    {
        Self {
            values: RwLock::new(values.into_iter().collect()),
        }
    }

    /// Number of keys currently stored.
    pub async fn len(&self) -> usize {
        self.values.read().await.len()
    }

    /// Whether the store holds no keys.
    pub async fn is_empty(&self) -> bool {
        self.values.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, key: StoreKey) -> Result<Option<String>, StoreError> {
        Ok(self.values.read().await.get(&key).cloned())
    }

    async fn set(&self, key: StoreKey, value: String) -> Result<(), StoreError> {
        self.values.write().await.insert(key, value);
        Ok(())
    }

    async fn remove(&self, key: StoreKey) -> Result<(), StoreError> {
        self.values.write().await.remove(&key);
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        self.values.write().await.clear();
        Ok(())
    }

    async fn set_many(&self, entries: Vec<(StoreKey, Option<String>)>) -> Result<(), StoreError> {
        let mut values = self.values.write().await;
        for (key, value) in entries {
            match value {
                Some(value) => values.insert(key, value),
                None => values.remove(&key),
            };
        }
        Ok(())
    }
}
