//! Family-directory use-case service.
//!
//! # Responsibility
//! - Provide register/get/list entry points over a household repository.
//! - Answer the promotion-eligibility probe the registry UI shows.
//! - Execute head promotions: gate, transform, commit, audit.
//!
//! # Invariants
//! - `promote` either commits the full retire-and-replace swap or reports a
//!   rejection with the directory unchanged.
//! - Eligible-member summaries are only produced for eligible households.

use crate::kinship::rebase::{can_rebase, rebase, RebaseError};
use crate::model::household::{Household, HouseholdId, Member, MemberId};
use crate::repo::household_repo::{
    DirectoryError, HouseholdListQuery, HouseholdRepository, PromotionRecord,
};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for directory use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Target household does not exist or is already retired.
    HouseholdNotFound(HouseholdId),
    /// A dependent carries a parent-class label; promotion is not permitted.
    NotEligible(HouseholdId),
    /// Engine-level rejection of the requested promotion.
    Rebase(RebaseError),
    /// Directory-layer failure.
    Directory(DirectoryError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HouseholdNotFound(id) => write!(f, "household not found: {id}"),
            Self::NotEligible(id) => write!(
                f,
                "household {id} already has a recorded parent; promotion is not permitted"
            ),
            Self::Rebase(err) => write!(f, "{err}"),
            Self::Directory(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Rebase(err) => Some(err),
            Self::Directory(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RebaseError> for ServiceError {
    fn from(value: RebaseError) -> Self {
        Self::Rebase(value)
    }
}

impl From<DirectoryError> for ServiceError {
    fn from(value: DirectoryError) -> Self {
        match value {
            DirectoryError::HouseholdNotFound(id) => Self::HouseholdNotFound(id),
            other => Self::Directory(other),
        }
    }
}

/// One row of the eligibility probe: enough for a caller to render a
/// promotion picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberSummary {
    pub id: MemberId,
    pub full_name: String,
    pub relation: String,
    /// Whether this member's relation projects onto a matrix category and
    /// could therefore become head.
    pub promotable: bool,
}

/// Answer to the "can this family re-base, and onto whom" probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EligibilityReport {
    pub can_rebase: bool,
    pub eligible_members: Vec<MemberSummary>,
}

/// Result of one committed promotion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromotionOutcome {
    pub record: PromotionRecord,
    pub household: Household,
}

/// Directory service facade over repository implementations.
pub struct DirectoryService<R: HouseholdRepository> {
    repo: R,
}

impl<R: HouseholdRepository> DirectoryService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers one household aggregate.
    pub fn register_household(&mut self, household: &Household) -> Result<HouseholdId, ServiceError> {
        let id = self.repo.register_household(household)?;
        info!(
            "event=household_registered module=service status=ok household={} members={}",
            id,
            household.members.len()
        );
        Ok(id)
    }

    /// Gets one active household by id.
    pub fn household(&self, id: HouseholdId) -> Result<Household, ServiceError> {
        self.repo
            .get_household(id, false)?
            .ok_or(ServiceError::HouseholdNotFound(id))
    }

    /// Lists households using retirement visibility and pagination options.
    pub fn list_households(
        &self,
        query: &HouseholdListQuery,
    ) -> Result<Vec<Household>, ServiceError> {
        Ok(self.repo.list_households(query)?)
    }

    /// Probes whether promotion is permitted and which members qualify.
    ///
    /// Mirrors the registry UI contract: member summaries are returned only
    /// when the household is eligible at all.
    pub fn eligibility(&self, id: HouseholdId) -> Result<EligibilityReport, ServiceError> {
        let household = self.household(id)?;
        let eligible = can_rebase(&household);
        let eligible_members = if eligible {
            household.members.iter().map(member_summary).collect()
        } else {
            Vec::new()
        };

        Ok(EligibilityReport {
            can_rebase: eligible,
            eligible_members,
        })
    }

    /// Promotes one member to head and commits the directory swap.
    ///
    /// The old aggregate is retired (tombstoned), the re-based replacement
    /// registered, and an audit record appended — atomically. Rejections
    /// leave the directory unchanged.
    pub fn promote(
        &mut self,
        household_id: HouseholdId,
        member_id: MemberId,
    ) -> Result<PromotionOutcome, ServiceError> {
        let household = self.household(household_id)?;
        if !can_rebase(&household) {
            return Err(ServiceError::NotEligible(household_id));
        }

        let replacement = rebase(&household, member_id)?;
        let record = self
            .repo
            .commit_promotion(household_id, member_id, &replacement)?;
        info!(
            "event=promotion_committed module=service status=ok retired={} replacement={} member={}",
            record.retired_household, record.replacement_household, record.promoted_member
        );

        Ok(PromotionOutcome {
            record,
            household: replacement,
        })
    }

    /// Audit trail of committed promotions, in commit order.
    pub fn promotion_records(&self) -> Vec<PromotionRecord> {
        self.repo.promotion_records()
    }
}

fn member_summary(member: &Member) -> MemberSummary {
    MemberSummary {
        id: member.id,
        full_name: member.person.full_name(),
        relation: member.relation.display().to_string(),
        promotable: member.relation.category().is_some(),
    }
}
