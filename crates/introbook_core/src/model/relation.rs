//! Kinship vocabulary: finer relation labels and matrix categories.
//!
//! # Responsibility
//! - Enumerate the closed set of relation labels accepted from ingestion.
//! - Project finer labels onto the seven matrix categories.
//! - Normalize free-form label strings from registry rows into the closed
//!   vocabulary.
//!
//! # Invariants
//! - `RelationCategory` is the only key type ever used for matrix lookups.
//! - Label parsing is total: unknown strings fold to `RelationLabel::Other`
//!   instead of failing.
//! - Exactly eight finer labels project onto a category; all others have no
//!   projection.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

static SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\-]+").expect("valid separator regex"));

/// Coarse kinship bucket understood by the relation matrix.
///
/// The perspective axis of the matrix enumerates these seven values; any
/// richer label must be projected down to one of them before a lookup.
/// Serialized forms are part of the external contract and match the
/// registry's casing exactly (`self`, `daughterInLaw`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RelationCategory {
    /// The reference person all other labels are expressed against.
    #[serde(rename = "self")]
    Head,
    Spouse,
    Son,
    DaughterInLaw,
    Daughter,
    Grandson,
    Granddaughter,
}

impl RelationCategory {
    /// All categories in matrix row/column order.
    pub const ALL: [RelationCategory; 7] = [
        RelationCategory::Head,
        RelationCategory::Spouse,
        RelationCategory::Son,
        RelationCategory::DaughterInLaw,
        RelationCategory::Daughter,
        RelationCategory::Grandson,
        RelationCategory::Granddaughter,
    ];

    /// Stable string form used by the registry contract.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Head => "self",
            Self::Spouse => "spouse",
            Self::Son => "son",
            Self::DaughterInLaw => "daughterInLaw",
            Self::Daughter => "daughter",
            Self::Grandson => "grandson",
            Self::Granddaughter => "granddaughter",
        }
    }

    /// Row/column position inside the fixed matrix.
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Head => 0,
            Self::Spouse => 1,
            Self::Son => 2,
            Self::DaughterInLaw => 3,
            Self::Daughter => 4,
            Self::Grandson => 5,
            Self::Granddaughter => 6,
        }
    }
}

impl Display for RelationCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical finer relation label from the closed ingestion vocabulary.
///
/// This is the richer, user-facing tier of the two-tier relation model. The
/// machine form (`as_str`) is the snake_case registry value; `display_name`
/// is the human-facing choice label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationLabel {
    Spouse,
    Son,
    Daughter,
    Father,
    Mother,
    Brother,
    Sister,
    Grandfather,
    Grandmother,
    Uncle,
    Aunt,
    Cousin,
    Nephew,
    Niece,
    SonInLaw,
    DaughterInLaw,
    FatherInLaw,
    MotherInLaw,
    Grandson,
    Granddaughter,
    Other,
}

impl RelationLabel {
    /// Stable snake_case machine value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Spouse => "spouse",
            Self::Son => "son",
            Self::Daughter => "daughter",
            Self::Father => "father",
            Self::Mother => "mother",
            Self::Brother => "brother",
            Self::Sister => "sister",
            Self::Grandfather => "grandfather",
            Self::Grandmother => "grandmother",
            Self::Uncle => "uncle",
            Self::Aunt => "aunt",
            Self::Cousin => "cousin",
            Self::Nephew => "nephew",
            Self::Niece => "niece",
            Self::SonInLaw => "son_in_law",
            Self::DaughterInLaw => "daughter_in_law",
            Self::FatherInLaw => "father_in_law",
            Self::MotherInLaw => "mother_in_law",
            Self::Grandson => "grandson",
            Self::Granddaughter => "granddaughter",
            Self::Other => "other",
        }
    }

    /// Human-facing choice label.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Spouse => "Spouse",
            Self::Son => "Son",
            Self::Daughter => "Daughter",
            Self::Father => "Father",
            Self::Mother => "Mother",
            Self::Brother => "Brother",
            Self::Sister => "Sister",
            Self::Grandfather => "Grandfather",
            Self::Grandmother => "Grandmother",
            Self::Uncle => "Uncle",
            Self::Aunt => "Aunt",
            Self::Cousin => "Cousin",
            Self::Nephew => "Nephew",
            Self::Niece => "Niece",
            Self::SonInLaw => "Son-in-law",
            Self::DaughterInLaw => "Daughter-in-law",
            Self::FatherInLaw => "Father-in-law",
            Self::MotherInLaw => "Mother-in-law",
            Self::Grandson => "Grandson",
            Self::Granddaughter => "Granddaughter",
            Self::Other => "Other",
        }
    }

    /// Projection onto the matrix category axis.
    ///
    /// Exactly eight labels project; siblings share the son/daughter
    /// generation. Everything else returns `None` and cannot drive a matrix
    /// lookup.
    pub fn category(self) -> Option<RelationCategory> {
        match self {
            Self::Spouse => Some(RelationCategory::Spouse),
            Self::Son => Some(RelationCategory::Son),
            Self::Daughter => Some(RelationCategory::Daughter),
            Self::DaughterInLaw => Some(RelationCategory::DaughterInLaw),
            Self::Grandson => Some(RelationCategory::Grandson),
            Self::Granddaughter => Some(RelationCategory::Granddaughter),
            Self::Brother => Some(RelationCategory::Son),
            Self::Sister => Some(RelationCategory::Daughter),
            _ => None,
        }
    }

    /// Whether this label belongs to the parent class that blocks
    /// re-basing (`father`, `mother`, `father_in_law`, `mother_in_law`).
    pub fn is_parent_class(self) -> bool {
        matches!(
            self,
            Self::Father | Self::Mother | Self::FatherInLaw | Self::MotherInLaw
        )
    }

    /// Normalizes one free-form registry label into the closed vocabulary.
    ///
    /// Accepts the canonical snake_case values, hyphen/space separated
    /// variants (`"Daughter-in-law"`, `"Daughter In Law"`), bilingual
    /// `"Son / પુત્ર"` forms (only the part before the first slash is read),
    /// and the bare Gujarati words the registry sheets use. Unknown input
    /// folds to `Other`.
    pub fn parse(raw: &str) -> RelationLabel {
        let prefix = raw.split('/').next().unwrap_or_default().trim();
        let lowered = prefix.to_lowercase();
        let normalized = SEPARATOR_RE.replace_all(&lowered, "_");

        match normalized.trim_matches('_') {
            "spouse" | "wife" | "husband" | "પત્ની" | "પતિ" => Self::Spouse,
            "son" | "પુત્ર" => Self::Son,
            "daughter" | "પુત્રી" | "દીકરી" => Self::Daughter,
            "father" | "પિતા" => Self::Father,
            "mother" | "માતા" => Self::Mother,
            "brother" | "ભાઈ" => Self::Brother,
            "sister" | "બહેન" => Self::Sister,
            "grandfather" | "દાદા" => Self::Grandfather,
            "grandmother" | "દાદી" => Self::Grandmother,
            "uncle" => Self::Uncle,
            "aunt" => Self::Aunt,
            "cousin" => Self::Cousin,
            "nephew" => Self::Nephew,
            "niece" => Self::Niece,
            "son_in_law" => Self::SonInLaw,
            "daughter_in_law" | "d_in_law" | "પુત્રવધૂ" | "પુત્રવધુ" => Self::DaughterInLaw,
            "father_in_law" | "સસરા" => Self::FatherInLaw,
            "mother_in_law" | "સાસુ" => Self::MotherInLaw,
            "grandson" | "પૌત્ર" => Self::Grandson,
            "granddaughter" | "પૌત્રી" => Self::Granddaughter,
            _ => Self::Other,
        }
    }
}

impl Display for RelationLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Relation carried by a household member, relative to the current head.
///
/// Two-tier by design: ingestion always produces a canonical `Label`;
/// perspective transforms may produce kinship text the closed vocabulary
/// cannot express (`"Son/Nephew"`), kept verbatim as `Compound`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MemberRelation {
    Label(RelationLabel),
    Compound(String),
}

impl MemberRelation {
    /// Lowers one matrix display label back into the finer vocabulary.
    ///
    /// A cell that one finer label renders exactly becomes that `Label`
    /// (`"Father"` -> `father`, `"Wife"`/`"Husband"` -> `spouse`); slashed
    /// and in-law compounds stay `Compound` verbatim.
    pub fn from_matrix_cell(cell: &str) -> MemberRelation {
        match cell {
            "Wife" | "Husband" => RelationLabel::Spouse.into(),
            "Son" => RelationLabel::Son.into(),
            "Daughter" => RelationLabel::Daughter.into(),
            "Father" => RelationLabel::Father.into(),
            "Mother" => RelationLabel::Mother.into(),
            "Brother" => RelationLabel::Brother.into(),
            "Sister" => RelationLabel::Sister.into(),
            "Grandfather" => RelationLabel::Grandfather.into(),
            "Grandmother" => RelationLabel::Grandmother.into(),
            "Aunt" => RelationLabel::Aunt.into(),
            "Nephew" => RelationLabel::Nephew.into(),
            "Niece" => RelationLabel::Niece.into(),
            "Daughter-in-law" => RelationLabel::DaughterInLaw.into(),
            "Father-in-law" => RelationLabel::FatherInLaw.into(),
            "Mother-in-law" => RelationLabel::MotherInLaw.into(),
            "Grandson" => RelationLabel::Grandson.into(),
            "Granddaughter" => RelationLabel::Granddaughter.into(),
            other => MemberRelation::Compound(other.to_string()),
        }
    }

    /// Category projection; `Compound` text never projects.
    pub fn category(&self) -> Option<RelationCategory> {
        match self {
            Self::Label(label) => label.category(),
            Self::Compound(_) => None,
        }
    }

    /// Parent-class check used by the eligibility gate.
    pub fn is_parent_class(&self) -> bool {
        match self {
            Self::Label(label) => label.is_parent_class(),
            Self::Compound(_) => false,
        }
    }

    /// Canonical label, when this relation is one.
    pub fn as_label(&self) -> Option<RelationLabel> {
        match self {
            Self::Label(label) => Some(*label),
            Self::Compound(_) => None,
        }
    }

    /// Human-facing text.
    pub fn display(&self) -> &str {
        match self {
            Self::Label(label) => label.display_name(),
            Self::Compound(text) => text.as_str(),
        }
    }
}

impl From<RelationLabel> for MemberRelation {
    fn from(value: RelationLabel) -> Self {
        Self::Label(value)
    }
}

impl Display for MemberRelation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display())
    }
}
