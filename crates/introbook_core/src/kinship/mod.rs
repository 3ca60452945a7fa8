//! Kinship algebra: the relation matrix and the head re-basing engine.
//!
//! # Responsibility
//! - Hold the fixed perspective/target lookup table as pure data.
//! - Recompute every member's relation when a different member becomes head.
//!
//! # Invariants
//! - The engine never mutates its input; a promotion yields a fresh
//!   aggregate or an error, nothing in between.
//!
//! # See also
//! - DESIGN.md (sibling-collapse and label-lowering decisions)

pub mod matrix;
pub mod rebase;
