//! MatchAll - the `*` range, satisfied by any version

use std::fmt;

use super::RangeNode;
use crate::version::Version;

/// A range that matches any version
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MatchAll;

impl MatchAll {
    pub fn new() -> Self {
        MatchAll
    }
}

impl RangeNode for MatchAll {
    fn is_satisfied_by(&self, _version: &Version) -> bool {
        true
    }
}

impl fmt::Display for MatchAll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "*")
    }
}
