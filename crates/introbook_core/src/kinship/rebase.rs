//! Head re-basing engine.
//!
//! # Responsibility
//! - Recompute every member's relation when one member is promoted to head.
//! - Gate promotion on the parent-class eligibility rule.
//!
//! # Invariants
//! - `rebase` is pure: the input household is read-only and the result is a
//!   fresh aggregate with a new id.
//! - A promoted member whose relation cannot be projected is a hard failure
//!   before any output is built; any *other* member's unprojectable relation
//!   is carried through verbatim instead.

use crate::kinship::matrix;
use crate::model::household::{Household, Member, MemberId};
use crate::model::relation::{MemberRelation, RelationCategory, RelationLabel};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Rejections raised by a promotion. Both abort the whole transformation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RebaseError {
    /// The requested member id does not exist in the household.
    MemberNotFound(MemberId),
    /// The promoted member's relation has no category projection, so the
    /// matrix cannot be consulted.
    UnsupportedRelation { member: MemberId, relation: String },
}

impl Display for RebaseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MemberNotFound(id) => write!(f, "member not found in household: {id}"),
            Self::UnsupportedRelation { member, relation } => write!(
                f,
                "relation `{relation}` of member {member} cannot be promoted to head"
            ),
        }
    }
}

impl Error for RebaseError {}

/// Whether re-basing is permitted for this household at all.
///
/// False iff any dependent carries a parent-class label: a recorded parent
/// means the family is already rooted at its true generational head. An
/// empty dependent list is always eligible.
pub fn can_rebase(household: &Household) -> bool {
    household
        .members
        .iter()
        .all(|member| !member.relation.is_parent_class())
}

/// Promotes `new_head` and re-expresses every relation from their standpoint.
///
/// The former head becomes the first dependent of the result, labeled with
/// what the promoted person calls them; every other dependent keeps its id
/// and attributes and gets its relation recomputed through the promoted
/// member's matrix row.
pub fn rebase(household: &Household, new_head: MemberId) -> Result<Household, RebaseError> {
    let promoted = household
        .member(new_head)
        .ok_or(RebaseError::MemberNotFound(new_head))?;
    let promoted_category =
        promoted
            .relation
            .category()
            .ok_or_else(|| RebaseError::UnsupportedRelation {
                member: new_head,
                relation: promoted.relation.display().to_string(),
            })?;

    let transformation = matrix::row(promoted_category);

    let mut members = Vec::with_capacity(household.members.len());
    members.push(Member::new(
        MemberRelation::from_matrix_cell(transformation.resolve(RelationCategory::Head)),
        household.head.clone(),
    ));

    for member in &household.members {
        if member.id == new_head {
            continue;
        }
        let relation = recompute_relation(member, promoted_category, transformation);
        members.push(Member::with_id(member.id, relation, member.person.clone()));
    }

    Ok(Household::new(promoted.person.clone(), members))
}

fn recompute_relation(
    member: &Member,
    promoted_category: RelationCategory,
    transformation: matrix::PerspectiveRow,
) -> MemberRelation {
    let Some(category) = member.relation.category() else {
        // Graceful degradation: one unrecognized label never aborts the batch.
        return member.relation.clone();
    };

    if category == promoted_category {
        if let Some(collapsed) = sibling_collapse(category) {
            return collapsed;
        }
    }

    MemberRelation::from_matrix_cell(transformation.resolve(category))
}

/// Same-generation override for members sharing the promoted category.
///
/// The matrix's own-category cell reads "Self", which is only valid for the
/// promoted member; peers in that category are siblings. The collapse is
/// defined for the son and daughter generations only.
fn sibling_collapse(category: RelationCategory) -> Option<MemberRelation> {
    match category {
        RelationCategory::Son => Some(RelationLabel::Brother.into()),
        RelationCategory::Daughter => Some(RelationLabel::Sister.into()),
        _ => None,
    }
}
