//! Leaf range node: a single comparator applied to a version

use std::fmt;

use super::RangeNode;
use crate::comparator::Comparator;
use crate::version::Version;

/// A range leaf such as `>=1.2.3`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComparatorVersion {
    comparator: Comparator,
    version: Version,
}

impl ComparatorVersion {
    pub fn new(comparator: Comparator, version: Version) -> Self {
        ComparatorVersion { comparator, version }
    }

    pub fn comparator(&self) -> Comparator {
        self.comparator
    }

    pub fn version(&self) -> &Version {
        &self.version
    }
}

impl RangeNode for ComparatorVersion {
    fn is_satisfied_by(&self, version: &Version) -> bool {
        self.comparator.compare(version, &self.version)
    }
}

impl fmt::Display for ComparatorVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.comparator, self.version)
    }
}
