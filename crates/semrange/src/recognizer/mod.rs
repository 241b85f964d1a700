//! Pattern-specific range recognizers
//!
//! Each recognizer handles one syntax variant. The dispatcher tries them in
//! [`RECOGNIZERS`] order and takes the first one whose `can_parse` accepts
//! the clause.

mod bare;
mod branch;
mod caret;
mod hyphen;
mod tilde;
mod wildcard;

use crate::error::{RangeError, Result};
use crate::range::Range;
use crate::token::{render_tokens, Token, TokenType};

pub use bare::BareComparatorRecognizer;
pub use branch::BranchRecognizer;
pub use caret::CaretRecognizer;
pub use hyphen::HyphenRecognizer;
pub use tilde::TildeRecognizer;
pub use wildcard::WildcardRecognizer;

/// A recognizer for one range syntax
pub trait Recognizer: Send + Sync {
    /// Short name used in logs and errors
    fn name(&self) -> &'static str;

    /// Check if the clause has this recognizer's shape
    fn can_parse(&self, tokens: &[Token]) -> bool;

    /// Build the range node; fails with `MalformedRange` when `can_parse` would reject
    fn parse(&self, tokens: &[Token]) -> Result<Range>;
}

/// Recognizers in dispatch priority order
///
/// Branch and hyphen shapes are super-sequences of what the wildcard and bare
/// recognizers accept, so they must be tried first.
pub static RECOGNIZERS: &[&dyn Recognizer] = &[
    &BranchRecognizer,
    &CaretRecognizer,
    &TildeRecognizer,
    &HyphenRecognizer,
    &WildcardRecognizer,
    &BareComparatorRecognizer,
];

/// Split tokens into the chunks between separators of the given type
///
/// Empty chunks are kept, so `a,,b` yields three chunks.
pub fn chunk_by(tokens: &[Token], separator: TokenType) -> Vec<&[Token]> {
    if tokens.is_empty() {
        return Vec::new();
    }
    tokens.split(|t| t.is(separator)).collect()
}

pub(crate) fn malformed(recognizer: &dyn Recognizer, tokens: &[Token]) -> RangeError {
    RangeError::MalformedRange {
        recognizer: recognizer.name(),
        input: render_tokens(tokens),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    #[test]
    fn test_priority_order() {
        let names: Vec<&str> = RECOGNIZERS.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["branch", "caret", "tilde", "hyphen", "wildcard", "bare"]);
    }

    #[test]
    fn test_chunk_by() {
        let tokens = tokenize("1.0-beta - 2").unwrap();
        let chunks = chunk_by(&tokens, TokenType::DashSeparator);
        let rendered: Vec<String> = chunks.iter().map(|c| render_tokens(c)).collect();
        assert_eq!(rendered, vec!["1.0", "beta", "2"]);

        let tokens = tokenize(">=1,<2").unwrap();
        assert_eq!(chunk_by(&tokens, TokenType::LogicalAnd).len(), 2);

        let tokens = tokenize("1").unwrap();
        assert_eq!(chunk_by(&tokens, TokenType::DashSeparator).len(), 1);

        assert!(chunk_by(&[], TokenType::DashSeparator).is_empty());
    }

    #[test]
    fn test_every_recognizer_validates_its_input() {
        let tokens = tokenize("foo").unwrap();
        for recognizer in RECOGNIZERS {
            assert!(!recognizer.can_parse(&tokens), "{} accepted foo", recognizer.name());
            match recognizer.parse(&tokens) {
                Err(RangeError::MalformedRange { recognizer: name, input }) => {
                    assert_eq!(name, recognizer.name());
                    assert_eq!(input, "foo");
                }
                other => panic!("{} returned {:?}", recognizer.name(), other),
            }
        }
    }
}
