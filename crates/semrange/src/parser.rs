//! Grammar dispatcher turning range text into a range AST

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{RangeError, Result};
use crate::lexer::tokenize;
use crate::range::{Disjunction, Range};
use crate::recognizer::{Recognizer, RECOGNIZERS};
use crate::token::Token;

lazy_static! {
    // OR constraint splitter
    static ref OR_CONSTRAINT_RE: Regex = Regex::new(r"\s*\|\|?\s*").unwrap();
}

/// Parses range expressions by dispatching each clause to the first accepting recognizer
#[derive(Clone, Copy)]
pub struct RangeParser {
    recognizers: &'static [&'static dyn Recognizer],
}

impl RangeParser {
    /// Create a parser using the default recognizer priority
    pub fn new() -> Self {
        RangeParser {
            recognizers: RECOGNIZERS,
        }
    }

    /// Parse a full range expression, including `||` alternatives
    pub fn parse(&self, input: &str) -> Result<Range> {
        let input = input.trim();
        if input.is_empty() {
            return Err(RangeError::unparsable(input));
        }

        let clauses: Vec<&str> = OR_CONSTRAINT_RE.split(input).collect();

        // Leading or trailing operator
        if clauses.iter().any(|c| c.is_empty()) {
            return Err(RangeError::unparsable(input));
        }

        let mut nodes = clauses
            .into_iter()
            .map(|clause| self.parse_clause(clause))
            .collect::<Result<Vec<Range>>>()?;

        if nodes.len() == 1 {
            return Ok(nodes.remove(0));
        }
        Ok(Disjunction::new(nodes).into())
    }

    /// Parse a single clause without `||`
    pub fn parse_clause(&self, clause: &str) -> Result<Range> {
        let tokens = tokenize(clause)?;
        match self.select(&tokens) {
            Some(recognizer) => recognizer.parse(&tokens),
            None => {
                log::debug!("No recognizer accepted \"{}\"", clause);
                Err(RangeError::unparsable(clause))
            }
        }
    }

    /// The first recognizer, in priority order, that accepts the tokens
    pub fn select(&self, tokens: &[Token]) -> Option<&'static dyn Recognizer> {
        let recognizer = self.recognizers.iter().copied().find(|r| r.can_parse(tokens));
        if let Some(r) = recognizer {
            log::trace!("Clause accepted by the {} recognizer", r.name());
        }
        recognizer
    }
}

impl Default for RangeParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::RangeNode;
    use crate::version::Version;

    fn parse(input: &str) -> Range {
        RangeParser::new().parse(input).unwrap()
    }

    fn selected(input: &str) -> Option<&'static str> {
        let tokens = tokenize(input).unwrap();
        RangeParser::new().select(&tokens).map(|r| r.name())
    }

    #[test]
    fn test_dispatch() {
        assert_eq!(selected("1.5.x-my_branch"), Some("branch"));
        assert_eq!(selected("^1.2"), Some("caret"));
        assert_eq!(selected("~1.2"), Some("tilde"));
        assert_eq!(selected("1.0 - 2.0"), Some("hyphen"));
        assert_eq!(selected("1.0.*"), Some("wildcard"));
        assert_eq!(selected(">=1.0"), Some("bare"));
        assert_eq!(selected("1.0-beta"), Some("bare"));
        assert_eq!(selected("~>1.0"), None);
    }

    #[test]
    fn test_parse_single_clause() {
        assert_eq!(parse("^1.2.3").to_string(), ">=1.2.3,<2.0.0");
        assert_eq!(parse("  ~1.2.3  ").to_string(), ">=1.2.3,<1.3.0");
        assert_eq!(parse("1.2.3").to_string(), "=1.2.3");
        assert_eq!(parse("*").to_string(), "*");
        assert_eq!(parse("^1.0 || *").to_string(), ">=1.0.0,<2.0.0|*");
    }

    #[test]
    fn test_parse_disjunction() {
        let range = parse("1.0.0 - 2.0.0||3.0.0 - 4.0.0");
        assert!(matches!(range, Range::Disjunction(_)));
        assert_eq!(range.to_string(), ">=1.0.0,<=2.0.0|>=3.0.0,<=4.0.0");
        assert!(range.is_satisfied_by(&Version::new(1, 5, 0)));
        assert!(range.is_satisfied_by(&Version::new(3, 5, 0)));
        assert!(!range.is_satisfied_by(&Version::new(2, 5, 0)));

        assert_eq!(parse("^1.0 | ^2.0").to_string(), ">=1.0.0,<2.0.0|>=2.0.0,<3.0.0");
        assert_eq!(parse("1.2.x || 2.x || 3").to_string(), ">=1.2.0,<1.3.0|>=2.0.0,<3.0.0|=3.0.0");
    }

    #[test]
    fn test_parse_fails() {
        let parser = RangeParser::new();
        for input in ["", "   ", "||1.0", "1.0||", "1.0 || || 2.0", "foo", "^", ">=1 <2 <3", "~1.2.1 >=1.2.3"] {
            assert!(
                matches!(parser.parse(input), Err(RangeError::UnparsableRange { .. })),
                "{:?} should be unparsable",
                input
            );
        }
        assert!(matches!(parser.parse("1.0 @ 2"), Err(RangeError::UnexpectedCharacter { .. })));
        assert!(matches!(
            parser.parse("^18446744073709551615"),
            Err(RangeError::IntegerOverflow { .. })
        ));
    }

    #[test]
    fn test_unparsable_carries_clause_text() {
        match RangeParser::new().parse("^1.0 || 1.0.0.0") {
            Err(RangeError::UnparsableRange { range }) => assert_eq!(range, "1.0.0.0"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
