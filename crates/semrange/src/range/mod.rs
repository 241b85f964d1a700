//! Range AST and satisfaction

mod comparator_version;
mod conjunction;
mod disjunction;
mod match_all;

use std::fmt;
use std::str::FromStr;

use crate::error::RangeError;
use crate::parser::RangeParser;
use crate::version::Version;

pub use comparator_version::ComparatorVersion;
pub use conjunction::Conjunction;
pub use disjunction::Disjunction;
pub use match_all::MatchAll;

/// Trait shared by all range nodes
pub trait RangeNode: fmt::Debug + fmt::Display + Send + Sync {
    /// Check if a concrete version lies in this range
    fn is_satisfied_by(&self, version: &Version) -> bool;
}

/// A parsed version range
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Range {
    Comparator(ComparatorVersion),
    Conjunction(Conjunction),
    Disjunction(Disjunction),
    MatchAll(MatchAll),
}

impl Range {
    /// Parse range text with the default recognizer set
    pub fn parse(input: &str) -> Result<Self, RangeError> {
        RangeParser::new().parse(input)
    }

    pub fn as_node(&self) -> &dyn RangeNode {
        match self {
            Range::Comparator(node) => node,
            Range::Conjunction(node) => node,
            Range::Disjunction(node) => node,
            Range::MatchAll(node) => node,
        }
    }

    /// Parse `version` and test it against this range; unparsable versions never match
    pub fn matches(&self, version: &str) -> bool {
        match Version::parse(version) {
            Ok(v) => self.is_satisfied_by(&v),
            Err(_) => false,
        }
    }
}

impl RangeNode for Range {
    fn is_satisfied_by(&self, version: &Version) -> bool {
        self.as_node().is_satisfied_by(version)
    }
}

impl From<ComparatorVersion> for Range {
    fn from(node: ComparatorVersion) -> Self {
        Range::Comparator(node)
    }
}

impl From<Conjunction> for Range {
    fn from(node: Conjunction) -> Self {
        Range::Conjunction(node)
    }
}

impl From<Disjunction> for Range {
    fn from(node: Disjunction) -> Self {
        Range::Disjunction(node)
    }
}

impl From<MatchAll> for Range {
    fn from(node: MatchAll) -> Self {
        Range::MatchAll(node)
    }
}

impl FromStr for Range {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Range::parse(s)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_node())
    }
}
