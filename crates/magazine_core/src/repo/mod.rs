//! Repository layer abstractions and the in-memory registry.
//!
//! # Responsibility
//! - Define the data access contract used by catalog services.
//! - Keep registry bookkeeping (ordering, reference checks) in one place.
//!
//! # Invariants
//! - Write paths validate records before mutating any state.
//! - Articles may only reference registered authors and magazines.

pub mod article_repo;
