use crate::view_composition::domain::{Component, ViewOptions};
use std::fmt;

/// Outcome of checking one component against the view options
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Eligibility {
    Included,
    /// The component has modules of its own and only leaves were requested
    ExcludedNonLeaf { submodule_count: usize },
    /// The component's packaging is on the exclusion list
    ExcludedPackaging { packaging: String },
}

impl Eligibility {
    pub fn is_included(&self) -> bool {
        matches!(self, Eligibility::Included)
    }
}

impl fmt::Display for Eligibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Eligibility::Included => write!(f, "included"),
            Eligibility::ExcludedNonLeaf { submodule_count } => {
                write!(f, "not a leaf, has {} module(s)", submodule_count)
            }
            Eligibility::ExcludedPackaging { packaging } => {
                write!(f, "packaging '{}' is excluded", packaging)
            }
        }
    }
}

/// EligibilityFilter - decides which components a view references
///
/// Rules run in a fixed order and stop at the first exclusion: the
/// leaf-only rule first, then the packaging exclusion list.
pub struct EligibilityFilter;

impl EligibilityFilter {
    pub fn evaluate(component: &Component, options: &ViewOptions) -> Eligibility {
        if options.only_leaf_projects && !component.is_leaf() {
            return Eligibility::ExcludedNonLeaf {
                submodule_count: component.submodule_count(),
            };
        }

        if options.excludes_packaging(component.packaging()) {
            return Eligibility::ExcludedPackaging {
                packaging: component.packaging().to_string(),
            };
        }

        Eligibility::Included
    }

    pub fn is_eligible(component: &Component, options: &ViewOptions) -> bool {
        Self::evaluate(component, options).is_included()
    }
}
