use crate::error::Result;
use crate::storage::traits::KeyValueStore;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Volatile store, the equivalent of a fresh browser profile
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get_raw(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set_raw(&self, key: &str, value: String) -> Result<()> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{load, load_list, save};

    #[tokio::test]
    async fn json_helpers_round_trip_through_the_store() {
        let store = MemoryStore::new();
        save(&store, "ids", &vec!["1", "2"]).await.unwrap();
        save(&store, "name", &"nest").await.unwrap();
        assert_eq!(store.len().await, 2);

        let ids: Vec<String> = load_list(&store, "ids").await.unwrap();
        assert_eq!(ids, vec!["1".to_string(), "2".to_string()]);

        store.remove("ids").await.unwrap();
        let gone: Option<Vec<String>> = load(&store, "ids").await.unwrap();
        assert!(gone.is_none());
        assert_eq!(store.len().await, 1);

        store.remove("name").await.unwrap();
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn corrupt_values_surface_as_serialization_errors() {
        let store = MemoryStore::new();
        store.set_raw("ids", "not json".to_string()).await.unwrap();

        let result: crate::error::Result<Vec<String>> = load_list(&store, "ids").await;
        assert!(matches!(
            result,
            Err(crate::error::AppError::Serialization(_))
        ));
    }
}
