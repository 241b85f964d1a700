//! Token types consumed by the range recognizers

use std::fmt;

use crate::error::{RangeError, Result};

/// Kind of a lexical token in a range expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    Digits,
    DotSeparator,
    DashSeparator,
    LabelString,
    WildcardDigits,
    CaretRange,
    TildeRange,
    GreaterThan,
    GreaterThanEqual,
    LessThan,
    LessThanEqual,
    EqualTo,
    LogicalAnd,
    LogicalOr,
    /// `+build` suffix, carried into the label's build metadata
    BuildMetadata,
}

impl TokenType {
    /// Check if this token type is one of the five comparator tokens
    pub fn is_comparator(&self) -> bool {
        matches!(
            self,
            TokenType::GreaterThan
                | TokenType::GreaterThanEqual
                | TokenType::LessThan
                | TokenType::LessThanEqual
                | TokenType::EqualTo
        )
    }

    /// Tokens that complete an operand; whitespace after one of these separates operands
    pub fn is_value(&self) -> bool {
        matches!(
            self,
            TokenType::Digits | TokenType::LabelString | TokenType::WildcardDigits | TokenType::BuildMetadata
        )
    }

    pub fn is_logical(&self) -> bool {
        matches!(self, TokenType::LogicalAnd | TokenType::LogicalOr)
    }
}

/// A single `(type, value)` token
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenType,
    value: String,
}

impl Token {
    pub fn new(kind: TokenType, value: impl Into<String>) -> Self {
        Token {
            kind,
            value: value.into(),
        }
    }

    pub fn kind(&self) -> TokenType {
        self.kind
    }

    pub fn is(&self, kind: TokenType) -> bool {
        self.kind == kind
    }

    /// The source text of the token
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Numeric value of a digits token
    pub fn number(&self) -> Result<u64> {
        if self.kind != TokenType::Digits {
            return Err(RangeError::malformed_version(
                self.value.clone(),
                "expected a numeric part",
            ));
        }
        self.value.parse().map_err(|_| RangeError::IntegerOverflow {
            value: self.value.clone(),
        })
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Reassemble tokens into text for diagnostics
pub fn render_tokens(tokens: &[Token]) -> String {
    tokens.iter().map(Token::value).collect()
}
