pub mod file;
pub mod keys;
pub mod memory;
pub mod traits;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use traits::KeyValueStore;

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Load and decode the value under `key`
pub async fn load<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>> {
    match store.get_raw(key).await? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Load a list, treating a missing key as empty
pub async fn load_list<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Result<Vec<T>> {
    Ok(load(store, key).await?.unwrap_or_default())
}

/// Encode `value` as JSON and store it under `key`
pub async fn save<T: Serialize + ?Sized>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    store.set_raw(key, json).await
}
