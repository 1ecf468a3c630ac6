use crate::error::Result;
use async_trait::async_trait;

/// String-keyed store of JSON documents
/// Implemented in memory for tests and on disk for the binary
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Raw JSON stored under `key`, if any
    async fn get_raw(&self, key: &str) -> Result<Option<String>>;

    /// Replace whatever is stored under `key`
    async fn set_raw(&self, key: &str, value: String) -> Result<()>;

    /// Delete `key`. Missing keys are not an error.
    async fn remove(&self, key: &str) -> Result<()>;

    /// Name of the backend, for logging
    fn backend_name(&self) -> &'static str;
}
