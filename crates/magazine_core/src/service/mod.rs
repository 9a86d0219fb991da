//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate registry writes into catalog use-cases.
//! - Compute derived author/magazine queries over the registry.
//!
//! # Invariants
//! - Derived queries are recomputed on every call; nothing is cached.
//! - Services never bypass repository validation or reference checks.

pub mod author_service;
pub mod catalog_service;
pub mod magazine_service;
