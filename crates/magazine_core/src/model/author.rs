//! Author domain model.
//!
//! # Invariants
//! - `name` is non-empty and never changes after construction.
//! - Identity is the `id`; two authors with the same name are distinct.

use crate::model::validation::{validate_author_name, validate_id, ValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for an author.
pub type AuthorId = Uuid;

/// A named person who writes articles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AuthorRecord")]
pub struct Author {
    id: AuthorId,
    name: String,
}

impl Author {
    /// Creates a new author with a generated stable ID.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Creates an author with a caller-provided stable ID.
    ///
    /// Used by import paths where identity already exists externally.
    pub fn with_id(id: AuthorId, name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        validate_id(id)?;
        validate_author_name(&name)?;
        Ok(Self { id, name })
    }

    pub fn id(&self) -> AuthorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Re-checks every field; used before a record is stored.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_id(self.id)?;
        validate_author_name(&self.name)
    }
}

#[derive(Deserialize)]
struct AuthorRecord {
    id: AuthorId,
    name: String,
}

impl TryFrom<AuthorRecord> for Author {
    type Error = ValidationError;

    fn try_from(record: AuthorRecord) -> Result<Self, Self::Error> {
        Self::with_id(record.id, record.name)
    }
}
