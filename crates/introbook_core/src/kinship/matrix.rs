//! Fixed relation matrix for the patrilineal joint-family model.
//!
//! # Responsibility
//! - Map `(perspective, target)` category pairs to display labels.
//!
//! # Invariants
//! - All 49 cells are populated at compile time; lookups are total.
//! - The table is pure data, defined once, never mutated.

use crate::model::relation::RelationCategory;

const CATEGORY_COUNT: usize = 7;

/// Row-major cells indexed by `RelationCategory::index()` on both axes.
///
/// Row = perspective (who is looking), column = target (who is described).
/// A slashed cell keeps both readings of an in-law or cousin position.
const CELLS: [[&str; CATEGORY_COUNT]; CATEGORY_COUNT] = [
    // from self
    [
        "Self",
        "Wife",
        "Son",
        "Daughter-in-law",
        "Daughter",
        "Grandson",
        "Granddaughter",
    ],
    // from spouse
    [
        "Husband",
        "Self",
        "Son",
        "Daughter-in-law",
        "Daughter",
        "Grandson",
        "Granddaughter",
    ],
    // from son
    [
        "Father",
        "Mother",
        "Self/Brother",
        "Wife/Sister-in-law(Bhabhi)",
        "Sister",
        "Son/Nephew",
        "Daughter/Niece",
    ],
    // from daughter-in-law
    [
        "Father-in-law",
        "Mother-in-law",
        "Husband/Brother-in-law(Devar)",
        "Self/Sister-in-law(Nanand)",
        "Sister-in-law(Nanand)",
        "Son/Nephew",
        "Daughter/Niece",
    ],
    // from daughter
    [
        "Father",
        "Mother",
        "Brother",
        "Sister-in-law(Bhabhi)",
        "Self",
        "Nephew",
        "Niece",
    ],
    // from grandson
    [
        "Grandfather",
        "Grandmother",
        "Father/Uncle",
        "Mother/Aunt",
        "Aunt",
        "Self/Cousin-brother",
        "Sister/Cousin-sister",
    ],
    // from granddaughter
    [
        "Grandfather",
        "Grandmother",
        "Father/Uncle",
        "Mother/Aunt",
        "Aunt",
        "Brother/Cousin-brother",
        "Self/Cousin-sister",
    ],
];

/// Looks up the label for `target` as seen from `perspective`.
pub fn resolve(perspective: RelationCategory, target: RelationCategory) -> &'static str {
    CELLS[perspective.index()][target.index()]
}

/// One perspective row: the transformation row a promotion applies to every
/// other member of the household.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PerspectiveRow {
    perspective: RelationCategory,
}

impl PerspectiveRow {
    pub fn perspective(self) -> RelationCategory {
        self.perspective
    }

    /// Label for `target` as seen from this row's standpoint.
    pub fn resolve(self, target: RelationCategory) -> &'static str {
        resolve(self.perspective, target)
    }
}

/// Selects the transformation row for one perspective.
pub fn row(perspective: RelationCategory) -> PerspectiveRow {
    PerspectiveRow { perspective }
}
