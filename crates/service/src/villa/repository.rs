use async_trait::async_trait;
use models::villa::{Villa, VillaId};

use crate::errors::ServiceError;

/// Store abstraction over the villa collection.
///
/// Implementations own id assignment (next id = max existing id + 1, or 1 for
/// an empty collection) and preserve insertion order on `list`. Business rules
/// such as name uniqueness live in [`crate::villa::VillaService`], not here.
#[async_trait]
pub trait VillaRepository: Send + Sync {
    /// All villas in insertion order.
    async fn list(&self) -> Vec<Villa>;

    async fn find(&self, id: VillaId) -> Option<Villa>;

    /// Case-insensitive membership test on the name field.
    async fn contains_name(&self, name: &str) -> bool;

    /// Assign the next id, append the record and return it.
    async fn insert(&self, name: String) -> Result<Villa, ServiceError>;

    /// Replace the name in place. Returns false when no such id exists.
    async fn rename(&self, id: VillaId, name: String) -> Result<bool, ServiceError>;

    /// Remove the record. Returns false when no such id exists.
    async fn remove(&self, id: VillaId) -> Result<bool, ServiceError>;
}
