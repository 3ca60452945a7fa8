//! Household directory contract and in-memory registry.
//!
//! # Responsibility
//! - Provide register/get/list APIs over household aggregates.
//! - Commit head promotions atomically with an audit record.
//!
//! # Invariants
//! - A household id is registered at most once, tombstones included.
//! - `commit_promotion` performs every check before its first mutation; a
//!   rejected commit leaves the directory untouched.
//! - Promotion of an already-retired aggregate is rejected, which serializes
//!   racing promotions on the same family.

use crate::model::household::{Household, HouseholdId, HouseholdValidationError, MemberId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Directory error for household registration and promotion commits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    Validation(HouseholdValidationError),
    HouseholdNotFound(HouseholdId),
    HouseholdRetired(HouseholdId),
    DuplicateHousehold(HouseholdId),
}

impl Display for DirectoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::HouseholdNotFound(id) => write!(f, "household not found: {id}"),
            Self::HouseholdRetired(id) => write!(f, "household already retired: {id}"),
            Self::DuplicateHousehold(id) => write!(f, "household id already registered: {id}"),
        }
    }
}

impl Error for DirectoryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<HouseholdValidationError> for DirectoryError {
    fn from(value: HouseholdValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Query options for listing households.
#[derive(Debug, Clone, Default)]
pub struct HouseholdListQuery {
    pub include_retired: bool,
    pub limit: Option<u32>,
    pub offset: u32,
}

/// Audit record of one committed promotion: the retired aggregate, its
/// replacement, and the member who became head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotionRecord {
    pub retired_household: HouseholdId,
    pub replacement_household: HouseholdId,
    pub promoted_member: MemberId,
}

/// Directory interface for household aggregates.
///
/// This is the seam the external persistence collaborator implements; the
/// core ships only the in-memory registry.
pub trait HouseholdRepository {
    fn register_household(&mut self, household: &Household) -> DirectoryResult<HouseholdId>;
    fn get_household(
        &self,
        id: HouseholdId,
        include_retired: bool,
    ) -> DirectoryResult<Option<Household>>;
    fn list_households(&self, query: &HouseholdListQuery) -> DirectoryResult<Vec<Household>>;
    fn commit_promotion(
        &mut self,
        retired: HouseholdId,
        promoted_member: MemberId,
        replacement: &Household,
    ) -> DirectoryResult<PromotionRecord>;
    fn promotion_records(&self) -> Vec<PromotionRecord>;
}

/// In-memory household directory keyed by household id.
#[derive(Debug, Default)]
pub struct InMemoryHouseholdDirectory {
    households: BTreeMap<HouseholdId, Household>,
    promotions: Vec<PromotionRecord>,
}

impl InMemoryHouseholdDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.households.len()
    }

    pub fn is_empty(&self) -> bool {
        self.households.is_empty()
    }
}

impl HouseholdRepository for InMemoryHouseholdDirectory {
    fn register_household(&mut self, household: &Household) -> DirectoryResult<HouseholdId> {
        household.validate()?;
        if self.households.contains_key(&household.id) {
            return Err(DirectoryError::DuplicateHousehold(household.id));
        }

        self.households.insert(household.id, household.clone());
        Ok(household.id)
    }

    fn get_household(
        &self,
        id: HouseholdId,
        include_retired: bool,
    ) -> DirectoryResult<Option<Household>> {
        let found = self
            .households
            .get(&id)
            .filter(|household| include_retired || household.is_active())
            .cloned();
        Ok(found)
    }

    fn list_households(&self, query: &HouseholdListQuery) -> DirectoryResult<Vec<Household>> {
        let limit = query.limit.map(|value| value as usize).unwrap_or(usize::MAX);
        let listed = self
            .households
            .values()
            .filter(|household| query.include_retired || household.is_active())
            .skip(query.offset as usize)
            .take(limit)
            .cloned()
            .collect();
        Ok(listed)
    }

    fn commit_promotion(
        &mut self,
        retired: HouseholdId,
        promoted_member: MemberId,
        replacement: &Household,
    ) -> DirectoryResult<PromotionRecord> {
        replacement.validate()?;

        let outgoing = self
            .households
            .get(&retired)
            .ok_or(DirectoryError::HouseholdNotFound(retired))?;
        if !outgoing.is_active() {
            return Err(DirectoryError::HouseholdRetired(retired));
        }
        if self.households.contains_key(&replacement.id) {
            return Err(DirectoryError::DuplicateHousehold(replacement.id));
        }

        // All checks passed; mutations from here on cannot fail.
        if let Some(outgoing) = self.households.get_mut(&retired) {
            outgoing.retire();
        }
        let mut incoming = replacement.clone();
        incoming.retired = false;
        self.households.insert(incoming.id, incoming);

        let record = PromotionRecord {
            retired_household: retired,
            replacement_household: replacement.id,
            promoted_member,
        };
        self.promotions.push(record);
        Ok(record)
    }

    fn promotion_records(&self) -> Vec<PromotionRecord> {
        self.promotions.clone()
    }
}
