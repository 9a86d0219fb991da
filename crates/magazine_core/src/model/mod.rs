//! Catalog domain model.
//!
//! # Responsibility
//! - Define the author, magazine and article records used by core logic.
//! - Own field-level validation so every constructor and setter shares it.
//!
//! # Invariants
//! - Every entity is identified by a stable, non-nil UUID.
//! - Validation always runs before a field is written.
//! - Articles refer to authors and magazines by id, never by copy.

pub mod article;
pub mod author;
pub mod magazine;
pub mod validation;
