use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Identifier type for villas. Positive, assigned by the store.
pub type VillaId = i32;

/// The domain record managed by this service.
/// - `id` is immutable once assigned (next id = current max id + 1, starting at 1)
/// - `name` is non-empty and case-insensitively unique, checked at creation only
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Villa {
    pub id: VillaId,
    pub name: String,
}

/// Read-side projection returned on every GET.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VillaDto {
    pub id: VillaId,
    pub name: String,
}

impl From<Villa> for VillaDto {
    fn from(v: Villa) -> Self {
        Self { id: v.id, name: v.name }
    }
}

/// Creation input. A client-supplied id is accepted for wire compatibility
/// but ignored; the store assigns ids.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateVillaInput {
    #[serde(default)]
    pub id: Option<VillaId>,
    #[serde(default)]
    pub name: String,
}

impl CreateVillaInput {
    pub fn validate(&self) -> Result<(), ModelError> {
        validate_name(&self.name)
    }
}

/// Full-replace input for PUT. The body id must match the path id.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateVillaInput {
    #[serde(default)]
    pub id: VillaId,
    #[serde(default)]
    pub name: String,
}

impl UpdateVillaInput {
    pub fn validate(&self, path_id: VillaId) -> Result<(), ModelError> {
        validate_name(&self.name)?;
        if self.id != path_id {
            return Err(ModelError::Validation(format!(
                "body id {} does not match path id {}",
                self.id, path_id
            )));
        }
        Ok(())
    }
}

/// Partial patch for PATCH. Absent fields are left unchanged.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct VillaPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl VillaPatch {
    /// Apply the patch to a transient copy and validate the result.
    /// The original record is untouched on error.
    pub fn apply_to(&self, villa: &Villa) -> Result<Villa, ModelError> {
        let mut patched = villa.clone();
        if let Some(name) = &self.name {
            patched.name = name.clone();
        }
        validate_name(&patched.name)?;
        Ok(patched)
    }
}

fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("name is required".into()));
    }
    Ok(())
}
