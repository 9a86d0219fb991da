//! Magazine domain model.
//!
//! # Responsibility
//! - Hold the mutable name/category pair of a publication.
//! - Reject invalid values before they are written.
//!
//! # Invariants
//! - `name` is always 2..=16 characters.
//! - `category` is never empty.
//! - A failed setter leaves the previous value in place.

use crate::model::validation::{
    validate_category, validate_id, validate_magazine_name, ValidationError,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a magazine.
pub type MagazineId = Uuid;

/// A named, categorized publication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MagazineRecord")]
pub struct Magazine {
    id: MagazineId,
    name: String,
    category: String,
}

impl Magazine {
    /// Creates a new magazine with a generated stable ID.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::with_id(Uuid::new_v4(), name, category)
    }

    /// Creates a magazine with a caller-provided stable ID.
    pub fn with_id(
        id: MagazineId,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let category = category.into();
        validate_id(id)?;
        validate_magazine_name(&name)?;
        validate_category(&category)?;
        Ok(Self { id, name, category })
    }

    pub fn id(&self) -> MagazineId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Replaces the magazine name.
    ///
    /// # Errors
    /// - `ValidationError::MagazineNameLength` when the new name is not 2..=16 chars.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        validate_magazine_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Replaces the magazine category.
    ///
    /// # Errors
    /// - `ValidationError::EmptyCategory` when the new category is empty.
    pub fn set_category(&mut self, category: impl Into<String>) -> Result<(), ValidationError> {
        let category = category.into();
        validate_category(&category)?;
        self.category = category;
        Ok(())
    }

    /// Re-checks every field; used before a record is stored.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_id(self.id)?;
        validate_magazine_name(&self.name)?;
        validate_category(&self.category)
    }
}

#[derive(Deserialize)]
struct MagazineRecord {
    id: MagazineId,
    name: String,
    category: String,
}

impl TryFrom<MagazineRecord> for Magazine {
    type Error = ValidationError;

    fn try_from(record: MagazineRecord) -> Result<Self, Self::Error> {
        Self::with_id(record.id, record.name, record.category)
    }
}
