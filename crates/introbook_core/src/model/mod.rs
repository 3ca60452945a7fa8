//! Domain model for the family registry.
//!
//! # Responsibility
//! - Define the kinship vocabulary (finer labels and matrix categories).
//! - Define the household aggregate shared by all core operations.
//!
//! # Invariants
//! - Every household has exactly one head; members never include the head.
//! - A member relation is either a canonical finer label or a compound
//!   kinship string produced by a perspective transform.

pub mod household;
pub mod relation;
