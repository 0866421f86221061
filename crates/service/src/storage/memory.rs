use std::sync::Arc;

use async_trait::async_trait;
use models::villa::{Villa, VillaId};
use tokio::sync::RwLock;

use crate::errors::ServiceError;
use crate::villa::VillaRepository;

/// In-process villa store.
///
/// Keeps the records in a `Vec` so `list` reflects insertion order, guarded by
/// an `RwLock` so the store is shareable across the server's worker threads.
/// State lives for the process lifetime only; nothing is persisted.
#[derive(Clone)]
pub struct MemoryVillaStore {
    inner: Arc<RwLock<Vec<Villa>>>,
}

impl MemoryVillaStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::with_villas(Vec::new())
    }

    /// Create a store pre-populated with the given records, e.g. demo data.
    pub fn with_villas(villas: Vec<Villa>) -> Self {
        Self { inner: Arc::new(RwLock::new(villas)) }
    }
}

impl Default for MemoryVillaStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VillaRepository for MemoryVillaStore {
    async fn list(&self) -> Vec<Villa> {
        let villas = self.inner.read().await;
        villas.clone()
    }

    async fn find(&self, id: VillaId) -> Option<Villa> {
        let villas = self.inner.read().await;
        villas.iter().find(|v| v.id == id).cloned()
    }

    async fn contains_name(&self, name: &str) -> bool {
        let needle = name.to_lowercase();
        let villas = self.inner.read().await;
        villas.iter().any(|v| v.name.to_lowercase() == needle)
    }

    async fn insert(&self, name: String) -> Result<Villa, ServiceError> {
        let mut villas = self.inner.write().await;
        let next_id = villas.iter().map(|v| v.id).max().unwrap_or(0) + 1;
        let villa = Villa { id: next_id, name };
        villas.push(villa.clone());
        Ok(villa)
    }

    async fn rename(&self, id: VillaId, name: String) -> Result<bool, ServiceError> {
        let mut villas = self.inner.write().await;
        match villas.iter_mut().find(|v| v.id == id) {
            Some(villa) => {
                villa.name = name;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn remove(&self, id: VillaId) -> Result<bool, ServiceError> {
        let mut villas = self.inner.write().await;
        let before = villas.len();
        villas.retain(|v| v.id != id);
        Ok(villas.len() != before)
    }
}
