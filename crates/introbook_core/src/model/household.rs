//! Household aggregate: one head and the members described relative to them.
//!
//! # Responsibility
//! - Define the person attribute record carried through every operation.
//! - Define the household shape with head/member roles fixed by the type.
//! - Provide aggregate validation for directory write paths.
//!
//! # Invariants
//! - Exactly one head per household; the head never appears in `members`.
//! - `id` and member ids are stable, non-nil, and unique inside the
//!   aggregate.
//! - Retirement is a tombstone; retired households are never hard-deleted.

use crate::model::relation::MemberRelation;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of one household aggregate.
pub type HouseholdId = Uuid;

/// Stable identifier of one dependent member.
pub type MemberId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    Single,
    Unmarried,
    Married,
    Divorced,
    Widowed,
}

/// Descriptive attributes of one person.
///
/// Opaque to the kinship engine: a re-basing carries every field through
/// unchanged. The typed fields cover the common registry columns; the long
/// tail of sheet-specific columns travels in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub surname: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub father_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub mother_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// ISO `YYYY-MM-DD`, when the sheet recorded one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marital_status: Option<MaritalStatus>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub mobile_number: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub address: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub area: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub city: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub hometown: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub country: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub occupation: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub education: String,
    /// Sheet columns with no typed field (caste, blood group, hobbies, ...).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

impl Person {
    /// Creates a person with the two mandatory name components.
    pub fn new(surname: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            surname: surname.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Registry display form: `surname name`.
    pub fn full_name(&self) -> String {
        let mut full = self.surname.clone();
        if !self.name.is_empty() {
            if !full.is_empty() {
                full.push(' ');
            }
            full.push_str(&self.name);
        }
        full
    }
}

/// One dependent member, described relative to the household head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub relation: MemberRelation,
    pub person: Person,
}

impl Member {
    /// Creates a member with a generated stable id.
    pub fn new(relation: impl Into<MemberRelation>, person: Person) -> Self {
        Self::with_id(Uuid::new_v4(), relation, person)
    }

    /// Creates a member with a caller-provided stable id.
    ///
    /// Used where identity already exists, e.g. dependents carried through a
    /// re-basing keep their ids.
    pub fn with_id(id: MemberId, relation: impl Into<MemberRelation>, person: Person) -> Self {
        Self {
            id,
            relation: relation.into(),
            person,
        }
    }
}

/// One family: a head plus the ordered dependents described against them.
///
/// Head identity changes only through promotion, which constructs a fresh
/// aggregate and retires this one; fields are never re-pointed in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Household {
    pub id: HouseholdId,
    pub head: Person,
    pub members: Vec<Member>,
    #[serde(default)]
    pub retired: bool,
}

impl Household {
    /// Creates a household with a generated id.
    pub fn new(head: Person, members: Vec<Member>) -> Self {
        Self::with_id(Uuid::new_v4(), head, members)
    }

    /// Creates a household with a caller-provided id.
    pub fn with_id(id: HouseholdId, head: Person, members: Vec<Member>) -> Self {
        Self {
            id,
            head,
            members,
            retired: false,
        }
    }

    /// Finds one dependent by stable id.
    pub fn member(&self, id: MemberId) -> Option<&Member> {
        self.members.iter().find(|member| member.id == id)
    }

    /// Marks this aggregate as replaced by a successor.
    pub fn retire(&mut self) {
        self.retired = true;
    }

    /// Whether this aggregate is the current state of the family.
    pub fn is_active(&self) -> bool {
        !self.retired
    }

    /// Checks aggregate identity invariants.
    ///
    /// Directory write paths must call this before mutating storage.
    pub fn validate(&self) -> Result<(), HouseholdValidationError> {
        if self.id.is_nil() {
            return Err(HouseholdValidationError::NilHouseholdId);
        }

        let mut seen = std::collections::HashSet::with_capacity(self.members.len());
        for member in &self.members {
            if member.id.is_nil() {
                return Err(HouseholdValidationError::NilMemberId);
            }
            if !seen.insert(member.id) {
                return Err(HouseholdValidationError::DuplicateMemberId(member.id));
            }
        }

        Ok(())
    }
}

/// Identity invariant violations inside one aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HouseholdValidationError {
    NilHouseholdId,
    NilMemberId,
    DuplicateMemberId(MemberId),
}

impl Display for HouseholdValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilHouseholdId => write!(f, "household id must not be nil"),
            Self::NilMemberId => write!(f, "member id must not be nil"),
            Self::DuplicateMemberId(id) => write!(f, "duplicate member id: {id}"),
        }
    }
}

impl Error for HouseholdValidationError {}
