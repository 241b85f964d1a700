//! OR node over the clauses of a range

use std::fmt;

use super::{Range, RangeNode};
use crate::version::Version;

/// Alternatives separated by a logical or, e.g. `^1.0|^2.0`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Disjunction {
    clauses: Vec<Range>,
}

impl Disjunction {
    /// Nested disjunctions are flattened into their clauses
    pub fn new(clauses: Vec<Range>) -> Self {
        let mut flat = Vec::with_capacity(clauses.len());
        for clause in clauses {
            match clause {
                Range::Disjunction(inner) => flat.extend(inner.clauses),
                other => flat.push(other),
            }
        }
        Disjunction { clauses: flat }
    }

    pub fn clauses(&self) -> &[Range] {
        &self.clauses
    }
}

impl RangeNode for Disjunction {
    fn is_satisfied_by(&self, version: &Version) -> bool {
        self.clauses.iter().any(|clause| clause.is_satisfied_by(version))
    }
}

impl fmt::Display for Disjunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let clauses: Vec<String> = self.clauses.iter().map(|c| c.to_string()).collect();
        write!(f, "{}", clauses.join("|"))
    }
}
