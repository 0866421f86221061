use models::villa::{CreateVillaInput, UpdateVillaInput, Villa, VillaId, VillaPatch};
use tracing::info;

use crate::errors::ServiceError;
use crate::villa::VillaRepository;

/// Application service encapsulating the villa business rules.
/// Validation and the creation-time uniqueness policy live here; id
/// assignment and ordering are the repository's concern.
pub struct VillaService<R: VillaRepository> {
    repo: R,
}

impl<R: VillaRepository> VillaService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// All villas in insertion order. Always succeeds.
    pub async fn list(&self) -> Vec<Villa> {
        self.repo.list().await
    }

    pub async fn get(&self, id: VillaId) -> Result<Villa, ServiceError> {
        check_id(id)?;
        self.repo
            .find(id)
            .await
            .ok_or_else(|| ServiceError::not_found("villa"))
    }

    /// Create with policy: names are unique case-insensitively, checked at
    /// creation only. A client-supplied id is ignored; the store assigns one.
    pub async fn create(&self, input: CreateVillaInput) -> Result<Villa, ServiceError> {
        input.validate()?;
        if self.repo.contains_name(&input.name).await {
            return Err(ServiceError::Conflict(format!(
                "villa named '{}' already exists",
                input.name
            )));
        }
        let villa = self.repo.insert(input.name).await?;
        info!(id = villa.id, name = %villa.name, "villa created");
        Ok(villa)
    }

    pub async fn update(&self, id: VillaId, input: UpdateVillaInput) -> Result<(), ServiceError> {
        input.validate(id)?;
        check_id(id)?;
        if !self.repo.rename(id, input.name).await? {
            return Err(ServiceError::not_found("villa"));
        }
        Ok(())
    }

    /// Apply a partial patch: the patched state is validated on a transient
    /// copy before anything is committed to the store.
    pub async fn patch(&self, id: VillaId, patch: VillaPatch) -> Result<(), ServiceError> {
        let current = self
            .repo
            .find(id)
            .await
            .ok_or_else(|| ServiceError::not_found("villa"))?;
        let patched = patch.apply_to(&current)?;
        if !self.repo.rename(id, patched.name).await? {
            return Err(ServiceError::not_found("villa"));
        }
        Ok(())
    }

    pub async fn delete(&self, id: VillaId) -> Result<(), ServiceError> {
        check_id(id)?;
        if !self.repo.remove(id).await? {
            return Err(ServiceError::not_found("villa"));
        }
        info!(id, "villa deleted");
        Ok(())
    }
}

fn check_id(id: VillaId) -> Result<(), ServiceError> {
    if id <= 0 {
        return Err(ServiceError::InvalidId(id));
    }
    Ok(())
}
