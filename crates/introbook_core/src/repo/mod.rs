//! Directory storage contracts and the in-memory implementation.
//!
//! # Responsibility
//! - Define the persistence-collaborator seam for household aggregates.
//! - Keep promotion commits atomic: retire-old plus register-new plus audit
//!   record land together or not at all.
//!
//! # Invariants
//! - Write paths must call `Household::validate()` before mutating storage.
//! - Retired aggregates are tombstones, never hard-deleted.

pub mod household_repo;
