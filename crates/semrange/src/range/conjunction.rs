//! AND node joining a lower and an upper bound

use std::fmt;

use super::{ComparatorVersion, RangeNode};
use crate::comparator::Comparator;
use crate::version::Version;

/// Two bounds that must both hold, e.g. `>=1.2.3,<2.0.0`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Conjunction {
    left: ComparatorVersion,
    right: ComparatorVersion,
}

impl Conjunction {
    pub fn new(left: ComparatorVersion, right: ComparatorVersion) -> Self {
        Conjunction { left, right }
    }

    /// `[lower, upper)`
    pub fn half_open(lower: Version, upper: Version) -> Self {
        Self::new(
            ComparatorVersion::new(Comparator::Gte, lower),
            ComparatorVersion::new(Comparator::Lt, upper),
        )
    }

    pub fn left(&self) -> &ComparatorVersion {
        &self.left
    }

    pub fn right(&self) -> &ComparatorVersion {
        &self.right
    }
}

impl RangeNode for Conjunction {
    fn is_satisfied_by(&self, version: &Version) -> bool {
        self.left.is_satisfied_by(version) && self.right.is_satisfied_by(version)
    }
}

impl fmt::Display for Conjunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.left, self.right)
    }
}
