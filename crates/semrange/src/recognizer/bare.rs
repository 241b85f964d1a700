//! Bare comparator ranges: `1.2.3`, `>=1.2.7`, `>=1.2.7 <3.0.0`

use super::{chunk_by, malformed, Recognizer};
use crate::comparator::Comparator;
use crate::error::Result;
use crate::range::{ComparatorVersion, Conjunction, Range};
use crate::token::{Token, TokenType};
use crate::version::VersionBuilder;

pub struct BareComparatorRecognizer;

/// Split an operand into its comparator (default `=`) and version tokens
fn split_operand(tokens: &[Token]) -> (Comparator, &[Token]) {
    match tokens.split_first() {
        Some((first, rest)) => match Comparator::from_token(first.kind()) {
            Some(comparator) => (comparator, rest),
            None => (Comparator::Eq, tokens),
        },
        None => (Comparator::Eq, tokens),
    }
}

fn is_operand(tokens: &[Token]) -> bool {
    let (_, version) = split_operand(tokens);
    VersionBuilder::accepts(version)
}

fn build_operand(tokens: &[Token]) -> Result<ComparatorVersion> {
    let (comparator, version) = split_operand(tokens);
    Ok(ComparatorVersion::new(comparator, VersionBuilder::parse(version)?))
}

impl Recognizer for BareComparatorRecognizer {
    fn name(&self) -> &'static str {
        "bare"
    }

    fn can_parse(&self, tokens: &[Token]) -> bool {
        let operands = chunk_by(tokens, TokenType::LogicalAnd);
        matches!(operands.len(), 1 | 2) && operands.iter().all(|op| is_operand(op))
    }

    fn parse(&self, tokens: &[Token]) -> Result<Range> {
        if !self.can_parse(tokens) {
            return Err(malformed(self, tokens));
        }

        match chunk_by(tokens, TokenType::LogicalAnd).as_slice() {
            [single] => Ok(build_operand(single)?.into()),
            [left, right] => Ok(Conjunction::new(build_operand(left)?, build_operand(right)?).into()),
            _ => Err(malformed(self, tokens)),
        }
    }
}
