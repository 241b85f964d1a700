//! Hyphenated ranges: `1.0.0 - 2.0.0`, `1.2-beta - 2.3-rc`

use super::{chunk_by, malformed, Recognizer};
use crate::comparator::Comparator;
use crate::error::Result;
use crate::range::{ComparatorVersion, Conjunction, Range};
use crate::token::{Token, TokenType};
use crate::version::VersionBuilder;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Chunk {
    Version,
    Label,
}

fn classify(chunk: &[Token]) -> Option<Chunk> {
    match chunk.first()?.kind() {
        TokenType::Digits => Some(Chunk::Version),
        TokenType::LabelString => Some(Chunk::Label),
        _ => None,
    }
}

pub struct HyphenRecognizer;

impl HyphenRecognizer {
    /// Index of the dash separating the lower bound from the upper bound
    fn range_dash(&self, tokens: &[Token]) -> Option<usize> {
        let chunks = chunk_by(tokens, TokenType::DashSeparator);
        let kinds = chunks.iter().map(|c| classify(c)).collect::<Option<Vec<Chunk>>>()?;

        use Chunk::*;
        let dash_number = match kinds.as_slice() {
            [Version, Version] | [Version, Version, Label] => 1,
            [Version, Label, Version] | [Version, Label, Version, Label] => 2,
            _ => return None,
        };

        tokens
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is(TokenType::DashSeparator))
            .map(|(i, _)| i)
            .nth(dash_number - 1)
    }

    fn bounds<'a>(&self, tokens: &'a [Token]) -> Option<(&'a [Token], &'a [Token])> {
        let dash = self.range_dash(tokens)?;
        let (lower, upper) = (&tokens[..dash], &tokens[dash + 1..]);
        if VersionBuilder::accepts(lower) && VersionBuilder::accepts(upper) {
            Some((lower, upper))
        } else {
            None
        }
    }
}

impl Recognizer for HyphenRecognizer {
    fn name(&self) -> &'static str {
        "hyphen"
    }

    fn can_parse(&self, tokens: &[Token]) -> bool {
        self.bounds(tokens).is_some()
    }

    fn parse(&self, tokens: &[Token]) -> Result<Range> {
        let (lower_tokens, upper_tokens) = self.bounds(tokens).ok_or_else(|| malformed(self, tokens))?;

        let lower = ComparatorVersion::new(Comparator::Gte, VersionBuilder::parse(lower_tokens)?);

        let given = VersionBuilder::parse(upper_tokens)?;
        let upper = if !given.label().is_absent() {
            ComparatorVersion::new(Comparator::Lte, given)
        } else {
            match VersionBuilder::part_count(upper_tokens) {
                1 => ComparatorVersion::new(Comparator::Lt, given.next_major()?),
                2 => ComparatorVersion::new(Comparator::Lt, given.next_minor()?),
                _ => ComparatorVersion::new(Comparator::Lte, given),
            }
        };

        Ok(Conjunction::new(lower, upper).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use crate::range::RangeNode;
    use crate::version::Version;

    fn parse(input: &str) -> Range {
        HyphenRecognizer.parse(&tokenize(input).unwrap()).unwrap()
    }

    #[test]
    fn test_can_parse() {
        let accepts = |s: &str| HyphenRecognizer.can_parse(&tokenize(s).unwrap());
        assert!(accepts("1.0.0 - 2.0.0"));
        assert!(accepts("1 - 2"));
        assert!(accepts("1.2-beta - 2.3"));
        assert!(accepts("1.2 - 2.3-rc"));
        assert!(accepts("1.2.3-alpha - 2.3-rc.1"));
        assert!(accepts("1.2.3+asdf - 2.4.3+asdf"));
        assert!(!accepts("1.2.3"));
        assert!(!accepts("1.2.3-beta"));
        assert!(!accepts("1 - 2 - 3"));
        assert!(!accepts("1.* - 2"));
        assert!(!accepts("^1 - 2"));
        assert!(!accepts("beta - 2"));
        assert!(!accepts("1 -- 2"));
    }

    #[test]
    fn test_parse_bounds() {
        assert_eq!(parse("1 - 2").to_string(), ">=1.0.0,<3.0.0");
        assert_eq!(parse("1 - 2.0").to_string(), ">=1.0.0,<2.1.0");
        assert_eq!(parse("1.3.7 - 2.1.5").to_string(), ">=1.3.7,<=2.1.5");
        assert_eq!(parse("v1 - v2").to_string(), ">=1.0.0,<3.0.0");
        assert_eq!(parse("1.2-beta - 2.3").to_string(), ">=1.2.0-beta,<2.4.0");
        assert_eq!(parse("1.2-RC - 2.3.1").to_string(), ">=1.2.0-rc,<=2.3.1");
        assert_eq!(parse("1.2.3-alpha - 2.3-RC").to_string(), ">=1.2.3-alpha,<=2.3.0-rc");
        assert_eq!(parse("1.2.3+asdf - 2.4.3+asdf").to_string(), ">=1.2.3+asdf,<=2.4.3+asdf");
    }

    #[test]
    fn test_satisfaction() {
        let range = parse("1.3.7 - 2.1.5");
        assert!(range.is_satisfied_by(&Version::new(1, 3, 7)));
        assert!(range.is_satisfied_by(&Version::new(2, 1, 5)));
        assert!(!range.is_satisfied_by(&Version::new(2, 1, 6)));
        assert!(!range.is_satisfied_by(&Version::new(1, 3, 6)));

        let range = parse("1 - 2");
        assert!(range.is_satisfied_by(&Version::new(2, 99, 0)));
        assert!(!range.is_satisfied_by(&Version::new(3, 0, 0)));
    }
}
