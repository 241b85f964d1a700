//! Composer-style branch ranges: `1.5.x-my_branch`

use super::{malformed, Recognizer, WildcardRecognizer};
use crate::error::Result;
use crate::range::Range;
use crate::token::{Token, TokenType};

pub struct BranchRecognizer;

impl BranchRecognizer {
    /// `1.5.x` out of `1.5.x-my_branch`
    fn wildcard_part<'a>(&self, tokens: &'a [Token]) -> Option<&'a [Token]> {
        let n = tokens.len();
        if n < 5 {
            return None;
        }
        let tail = &tokens[n - 3..];
        let shape = tail[0].is(TokenType::WildcardDigits)
            && tail[1].is(TokenType::DashSeparator)
            && tail[2].is(TokenType::LabelString);
        // At least one concrete part must precede the wildcard
        let prefix = &tokens[..n - 2];
        if shape && prefix[0].is(TokenType::Digits) {
            Some(prefix)
        } else {
            None
        }
    }
}

impl Recognizer for BranchRecognizer {
    fn name(&self) -> &'static str {
        "branch"
    }

    fn can_parse(&self, tokens: &[Token]) -> bool {
        self.wildcard_part(tokens)
            .map_or(false, |prefix| WildcardRecognizer.can_parse(prefix))
    }

    fn parse(&self, tokens: &[Token]) -> Result<Range> {
        if !self.can_parse(tokens) {
            return Err(malformed(self, tokens));
        }
        let prefix = self.wildcard_part(tokens).ok_or_else(|| malformed(self, tokens))?;
        log::trace!("Branch \"{}\" resolved to its version prefix", tokens[tokens.len() - 1]);
        WildcardRecognizer.parse(prefix)
    }
}
