//! Caret ranges: `^1.2.3` allows anything below the next major

use super::{malformed, Recognizer};
use crate::error::Result;
use crate::range::{Conjunction, Range};
use crate::token::{Token, TokenType};
use crate::version::VersionBuilder;

pub struct CaretRecognizer;

impl Recognizer for CaretRecognizer {
    fn name(&self) -> &'static str {
        "caret"
    }

    fn can_parse(&self, tokens: &[Token]) -> bool {
        match tokens.split_first() {
            Some((first, rest)) => first.is(TokenType::CaretRange) && VersionBuilder::accepts(rest),
            None => false,
        }
    }

    fn parse(&self, tokens: &[Token]) -> Result<Range> {
        if !self.can_parse(tokens) {
            return Err(malformed(self, tokens));
        }

        let lower = VersionBuilder::parse(&tokens[1..])?;
        let upper = lower.next_major()?;
        Ok(Conjunction::half_open(lower, upper).into())
    }
}
