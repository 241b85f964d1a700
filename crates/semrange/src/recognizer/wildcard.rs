//! Wildcard ranges: `3.*`, `5.1.x`, `*`

use super::{malformed, Recognizer};
use crate::error::Result;
use crate::range::{Conjunction, MatchAll, Range};
use crate::token::{Token, TokenType};
use crate::version::{split_wildcard_suffix, VersionBuilder};

pub struct WildcardRecognizer;

impl WildcardRecognizer {
    /// Concrete prefix of an accepted wildcard sequence
    fn concrete_prefix<'a>(&self, tokens: &'a [Token]) -> Option<&'a [Token]> {
        if !tokens.last().map_or(false, |t| t.is(TokenType::WildcardDigits)) {
            return None;
        }
        match split_wildcard_suffix(tokens) {
            // major.minor.patch.* has no part left to float
            Ok((concrete, _)) if concrete.len() <= 3 => Some(concrete),
            _ => None,
        }
    }
}

impl Recognizer for WildcardRecognizer {
    fn name(&self) -> &'static str {
        "wildcard"
    }

    fn can_parse(&self, tokens: &[Token]) -> bool {
        self.concrete_prefix(tokens).is_some()
    }

    fn parse(&self, tokens: &[Token]) -> Result<Range> {
        let concrete = self.concrete_prefix(tokens).ok_or_else(|| malformed(self, tokens))?;

        if concrete.is_empty() {
            return Ok(MatchAll::new().into());
        }

        let lower = VersionBuilder::build(concrete, &[])?;
        let upper = if concrete.len() == 1 {
            lower.next_major()?
        } else {
            lower.next_minor()?
        };

        Ok(Conjunction::half_open(lower, upper).into())
    }
}
