//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business rules from storage access.
//! - Reuses validation and record definitions in the `models` crate.
//! - Provides clear error types at the service boundary.

pub mod errors;
pub mod storage;
pub mod villa;
