//! Tilde ranges: `~1.2.3` allows patch updates, `~1.2` and `~1` minor updates

use super::{malformed, Recognizer};
use crate::error::Result;
use crate::range::{Conjunction, Range};
use crate::token::{Token, TokenType};
use crate::version::VersionBuilder;

pub struct TildeRecognizer;

impl Recognizer for TildeRecognizer {
    fn name(&self) -> &'static str {
        "tilde"
    }

    fn can_parse(&self, tokens: &[Token]) -> bool {
        match tokens.split_first() {
            Some((first, rest)) => first.is(TokenType::TildeRange) && VersionBuilder::accepts(rest),
            None => false,
        }
    }

    fn parse(&self, tokens: &[Token]) -> Result<Range> {
        if !self.can_parse(tokens) {
            return Err(malformed(self, tokens));
        }

        let version_tokens = &tokens[1..];
        let lower = VersionBuilder::parse(version_tokens)?;
        // The last given part floats; the one before it is pinned
        let upper = if VersionBuilder::part_count(version_tokens) == 3 {
            lower.next_minor()?
        } else {
            lower.next_major()?
        };

        Ok(Conjunction::half_open(lower, upper).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use crate::range::RangeNode;
    use crate::version::Version;

    fn parse(input: &str) -> Range {
        TildeRecognizer.parse(&tokenize(input).unwrap()).unwrap()
    }

    #[test]
    fn test_can_parse() {
        let accepts = |s: &str| TildeRecognizer.can_parse(&tokenize(s).unwrap());
        assert!(accepts("~1"));
        assert!(accepts("~1.2"));
        assert!(accepts("~1.2.3-rc"));
        assert!(!accepts("~"));
        assert!(!accepts("~>1.2"));
        assert!(!accepts("^1.2"));
        assert!(!accepts("~1.x"));
    }

    #[test]
    fn test_parse() {
        assert_eq!(parse("~1.2.3").to_string(), ">=1.2.3,<1.3.0");
        assert_eq!(parse("~1.2").to_string(), ">=1.2.0,<2.0.0");
        assert_eq!(parse("~1").to_string(), ">=1.0.0,<2.0.0");
        assert_eq!(parse("~1.2-beta").to_string(), ">=1.2.0-beta,<2.0.0");
        assert_eq!(parse("~1.2.2-dev").to_string(), ">=1.2.2-dev,<1.3.0");
    }

    #[test]
    fn test_satisfaction() {
        let range = parse("~1.2.3");
        assert!(range.is_satisfied_by(&Version::new(1, 2, 3)));
        assert!(range.is_satisfied_by(&Version::new(1, 2, 9)));
        assert!(!range.is_satisfied_by(&Version::new(1, 3, 0)));
        assert!(!range.is_satisfied_by(&Version::new(1, 2, 2)));

        let range = parse("~2.4");
        assert!(range.is_satisfied_by(&Version::new(2, 9, 0)));
        assert!(!range.is_satisfied_by(&Version::new(3, 0, 0)));
        assert!(!range.is_satisfied_by(&Version::new(2, 3, 9)));
    }
}
