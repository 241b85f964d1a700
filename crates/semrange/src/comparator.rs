//! Comparator algebra over versions

use std::fmt;

use crate::token::TokenType;
use crate::version::Version;

/// The five comparison operators a range leaf can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparator {
    /// Equal (=)
    Eq,
    /// Greater than (>)
    Gt,
    /// Greater than or equal (>=)
    Gte,
    /// Less than (<)
    Lt,
    /// Less than or equal (<=)
    Lte,
}

impl Comparator {
    /// Parse a comparator from its symbol
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "=" | "==" => Some(Comparator::Eq),
            ">" => Some(Comparator::Gt),
            ">=" => Some(Comparator::Gte),
            "<" => Some(Comparator::Lt),
            "<=" => Some(Comparator::Lte),
            _ => None,
        }
    }

    pub fn from_token(kind: TokenType) -> Option<Self> {
        match kind {
            TokenType::EqualTo => Some(Comparator::Eq),
            TokenType::GreaterThan => Some(Comparator::Gt),
            TokenType::GreaterThanEqual => Some(Comparator::Gte),
            TokenType::LessThan => Some(Comparator::Lt),
            TokenType::LessThanEqual => Some(Comparator::Lte),
            _ => None,
        }
    }

    /// Canonical symbol, used for rendering
    pub fn symbol(&self) -> &'static str {
        match self {
            Comparator::Eq => "=",
            Comparator::Gt => ">",
            Comparator::Gte => ">=",
            Comparator::Lt => "<",
            Comparator::Lte => "<=",
        }
    }

    pub fn all() -> &'static [Comparator] {
        &[Comparator::Eq, Comparator::Gt, Comparator::Gte, Comparator::Lt, Comparator::Lte]
    }

    /// Evaluate `left <op> right`
    pub fn compare(&self, left: &Version, right: &Version) -> bool {
        match self {
            Comparator::Eq => Self::equal_to(left, right),
            Comparator::Gt => Self::greater_than(left, right),
            Comparator::Gte => Self::greater_than_or_equal_to(left, right),
            Comparator::Lt => Self::less_than(left, right),
            Comparator::Lte => Self::less_than_or_equal_to(left, right),
        }
    }

    /// The ordering primitive every other comparison derives from
    pub fn less_than(left: &Version, right: &Version) -> bool {
        if left.major() != right.major() {
            return left.major() < right.major();
        }
        if left.minor() != right.minor() {
            return left.minor() < right.minor();
        }
        if left.patch() != right.patch() {
            return left.patch() < right.patch();
        }

        let (l, r) = (left.label(), right.label());
        if l.precedence() != r.precedence() {
            return l.precedence() < r.precedence();
        }

        l.numeric_version().unwrap_or(0) < r.numeric_version().unwrap_or(0)
    }

    pub fn greater_than(left: &Version, right: &Version) -> bool {
        Self::less_than(right, left)
    }

    /// Equality of the canonical form, label name and build metadata included
    pub fn equal_to(left: &Version, right: &Version) -> bool {
        left == right
    }

    pub fn greater_than_or_equal_to(left: &Version, right: &Version) -> bool {
        Self::greater_than(left, right) || Self::equal_to(left, right)
    }

    pub fn less_than_or_equal_to(left: &Version, right: &Version) -> bool {
        Self::less_than(left, right) || Self::equal_to(left, right)
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
