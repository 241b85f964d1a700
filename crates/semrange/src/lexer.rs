//! Tokenizer turning range text into a token stream

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{RangeError, Result};
use crate::token::{Token, TokenType};

lazy_static! {
    static ref WHITESPACE_RE: Regex = Regex::new(r"^\s+").unwrap();

    static ref COMPARATOR_RE: Regex = Regex::new(r"^(?:>=|<=|==|>|<|=)").unwrap();

    static ref DIGITS_RE: Regex = Regex::new(r"^[0-9]+").unwrap();

    // Labels and branch names; a lone x/X is a wildcard
    static ref IDENTIFIER_RE: Regex = Regex::new(r"^[A-Za-z][A-Za-z0-9_]*").unwrap();

    static ref BUILD_METADATA_RE: Regex = Regex::new(r"^\+[0-9A-Za-z.-]+").unwrap();

    static ref OR_RE: Regex = Regex::new(r"^\|\|?").unwrap();

    static ref V_PREFIX_RE: Regex = Regex::new(r"^[vV][0-9]").unwrap();
}

/// Tokenize a range expression or a version string
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut pos = 0;
    let mut after_space = false;

    while pos < input.len() {
        let rest = &input[pos..];

        if let Some(m) = WHITESPACE_RE.find(rest) {
            pos += m.end();
            if separates_operands(tokens.last(), input[pos..].chars().next()) {
                tokens.push(Token::new(TokenType::LogicalAnd, " "));
            }
            after_space = true;
            continue;
        }

        if is_version_prefix(tokens.last(), after_space, rest) {
            pos += 1;
            after_space = false;
            continue;
        }

        let (mut kind, len) = match match_token(rest) {
            Some(found) => found,
            None => {
                let character = rest.chars().next().unwrap_or_default();
                return Err(RangeError::UnexpectedCharacter {
                    character,
                    position: pos,
                    input: input.to_string(),
                });
            }
        };

        // `1.0.0-x` carries a label named x, not a wildcard
        if kind == TokenType::WildcardDigits && &rest[..len] != "*" && follows_dash(tokens.last()) {
            kind = TokenType::LabelString;
        }

        tokens.push(Token::new(kind, &rest[..len]));
        pos += len;
        after_space = false;
    }

    log::trace!("Tokenized \"{}\" into {} tokens", input, tokens.len());
    Ok(tokens)
}

fn match_token(rest: &str) -> Option<(TokenType, usize)> {
    if let Some(m) = COMPARATOR_RE.find(rest) {
        let kind = match m.as_str() {
            ">=" => TokenType::GreaterThanEqual,
            "<=" => TokenType::LessThanEqual,
            ">" => TokenType::GreaterThan,
            "<" => TokenType::LessThan,
            _ => TokenType::EqualTo,
        };
        return Some((kind, m.end()));
    }

    if let Some(m) = DIGITS_RE.find(rest) {
        return Some((TokenType::Digits, m.end()));
    }

    if let Some(m) = IDENTIFIER_RE.find(rest) {
        let kind = if m.as_str().eq_ignore_ascii_case("x") {
            TokenType::WildcardDigits
        } else {
            TokenType::LabelString
        };
        return Some((kind, m.end()));
    }

    if let Some(m) = BUILD_METADATA_RE.find(rest) {
        return Some((TokenType::BuildMetadata, m.end()));
    }

    if let Some(m) = OR_RE.find(rest) {
        return Some((TokenType::LogicalOr, m.end()));
    }

    let kind = match rest.chars().next()? {
        '.' => TokenType::DotSeparator,
        '-' => TokenType::DashSeparator,
        '*' => TokenType::WildcardDigits,
        '^' => TokenType::CaretRange,
        '~' => TokenType::TildeRange,
        ',' => TokenType::LogicalAnd,
        _ => return None,
    };
    Some((kind, 1))
}

/// Whitespace between two complete operands is an implicit AND
fn separates_operands(previous: Option<&Token>, next: Option<char>) -> bool {
    match (previous, next) {
        (Some(prev), Some(c)) => prev.kind().is_value() && !matches!(c, '-' | ',' | '|'),
        _ => false,
    }
}

fn follows_dash(previous: Option<&Token>) -> bool {
    previous.map_or(false, |t| t.is(TokenType::DashSeparator))
}

/// A `v` directly before the major part, e.g. `v1.2.3` or `^v2`
fn is_version_prefix(previous: Option<&Token>, after_space: bool, rest: &str) -> bool {
    if !V_PREFIX_RE.is_match(rest) {
        return false;
    }
    match previous.map(Token::kind) {
        None => true,
        Some(TokenType::DashSeparator) => after_space,
        Some(kind) => kind.is_comparator() || kind.is_logical() || matches!(kind, TokenType::CaretRange | TokenType::TildeRange),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use TokenType::*;

    fn kinds(input: &str) -> Vec<TokenType> {
        tokenize(input).unwrap().iter().map(Token::kind).collect()
    }

    #[test]
    fn test_simple_versions() {
        assert_eq!(kinds("1"), vec![Digits]);
        assert_eq!(kinds("1.2.3"), vec![Digits, DotSeparator, Digits, DotSeparator, Digits]);
        assert_eq!(
            kinds("1.2.3-rc.2"),
            vec![Digits, DotSeparator, Digits, DotSeparator, Digits, DashSeparator, LabelString, DotSeparator, Digits]
        );
        assert_eq!(kinds("v1.0"), vec![Digits, DotSeparator, Digits]);
        assert_eq!(kinds("1.0.0+build.5"), vec![Digits, DotSeparator, Digits, DotSeparator, Digits, BuildMetadata]);
    }

    #[test]
    fn test_operators() {
        assert_eq!(kinds("^1"), vec![CaretRange, Digits]);
        assert_eq!(kinds("~v2"), vec![TildeRange, Digits]);
        assert_eq!(kinds(">=1"), vec![GreaterThanEqual, Digits]);
        assert_eq!(kinds("<= 1"), vec![LessThanEqual, Digits]);
        assert_eq!(kinds(">1"), vec![GreaterThan, Digits]);
        assert_eq!(kinds("<1"), vec![LessThan, Digits]);
        assert_eq!(kinds("=1"), vec![EqualTo, Digits]);
        assert_eq!(kinds("==1"), vec![EqualTo, Digits]);
        assert_eq!(kinds("1||2"), vec![Digits, LogicalOr, Digits]);
        assert_eq!(kinds("1 | 2"), vec![Digits, LogicalOr, Digits]);
    }

    #[test]
    fn test_wildcards() {
        assert_eq!(kinds("3.*"), vec![Digits, DotSeparator, WildcardDigits]);
        assert_eq!(kinds("2.x.X"), vec![Digits, DotSeparator, WildcardDigits, DotSeparator, WildcardDigits]);
        assert_eq!(
            kinds("1.5.x-my_branch"),
            vec![Digits, DotSeparator, Digits, DotSeparator, WildcardDigits, DashSeparator, LabelString]
        );

        assert_eq!(kinds("1.0.0-x"), vec![Digits, DotSeparator, Digits, DotSeparator, Digits, DashSeparator, LabelString]);
        assert_eq!(kinds("1.0.0-X.2")[6], LabelString);
        assert_eq!(kinds("1.0.0-*")[6], WildcardDigits);

        let tokens = tokenize("1.0-xenial").unwrap();
        assert_eq!(tokens[4].kind(), LabelString);
        assert_eq!(tokens[4].value(), "xenial");
    }

    #[test]
    fn test_whitespace_and() {
        assert_eq!(
            kinds(">=1.2.7 <3.0.0"),
            vec![
                GreaterThanEqual, Digits, DotSeparator, Digits, DotSeparator, Digits, LogicalAnd, LessThan, Digits,
                DotSeparator, Digits, DotSeparator, Digits
            ]
        );
        assert_eq!(kinds(">=1 , <2"), vec![GreaterThanEqual, Digits, LogicalAnd, LessThan, Digits]);
        assert_eq!(kinds("  1  "), vec![Digits]);
    }

    #[test]
    fn test_hyphen_range() {
        assert_eq!(kinds("1 - 2"), vec![Digits, DashSeparator, Digits]);
        assert_eq!(kinds("v1 - v2"), vec![Digits, DashSeparator, Digits]);
        assert_eq!(
            kinds("1-beta - 2"),
            vec![Digits, DashSeparator, LabelString, DashSeparator, Digits]
        );
        // v is a label when it follows a dash directly
        assert_eq!(kinds("1-v2"), vec![Digits, DashSeparator, LabelString]);
    }

    #[test]
    fn test_unexpected_character() {
        match tokenize("1.2 # 3") {
            Err(RangeError::UnexpectedCharacter { character, position, input }) => {
                assert_eq!(character, '#');
                assert_eq!(position, 4);
                assert_eq!(input, "1.2 # 3");
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(tokenize("1.0@dev").is_err());
    }

    #[test]
    fn test_empty() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize("   ").unwrap().is_empty());
    }
}
