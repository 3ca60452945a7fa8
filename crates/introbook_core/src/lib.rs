//! Core domain logic for the Introbook family registry.
//! This crate is the single source of truth for kinship invariants.

pub mod kinship;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use kinship::rebase::{can_rebase, rebase, RebaseError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::household::{
    Gender, Household, HouseholdId, HouseholdValidationError, MaritalStatus, Member, MemberId,
    Person,
};
pub use model::relation::{MemberRelation, RelationCategory, RelationLabel};
pub use repo::household_repo::{
    DirectoryError, DirectoryResult, HouseholdListQuery, HouseholdRepository,
    InMemoryHouseholdDirectory, PromotionRecord,
};
pub use service::directory_service::{
    DirectoryService, EligibilityReport, MemberSummary, PromotionOutcome, ServiceError,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
