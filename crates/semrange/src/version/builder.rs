//! Building versions from token sub-sequences

use super::{Label, Version};
use crate::error::{RangeError, Result};
use crate::token::{render_tokens, Token, TokenType};

/// Converts `major[.minor[.patch]]` tokens plus optional label tokens into a [`Version`]
pub struct VersionBuilder;

impl VersionBuilder {
    /// Build a version from its numeric tokens and its label tokens
    ///
    /// `version_tokens` must be 1, 3 or 5 tokens alternating digits and dots.
    /// `label_tokens` is empty, `[label]` or `[label, ., digits]`, optionally
    /// followed by a build metadata token (which may also stand alone).
    pub fn build(version_tokens: &[Token], label_tokens: &[Token]) -> Result<Version> {
        if !is_version_shape(version_tokens) {
            return Err(RangeError::malformed_version(
                render_tokens(version_tokens),
                "expected major[.minor[.patch]]",
            ));
        }

        let parts = version_tokens
            .iter()
            .step_by(2)
            .map(Token::number)
            .collect::<Result<Vec<u64>>>()?;

        let label = build_label(label_tokens)?;

        Ok(Version::with_label(
            parts[0],
            parts.get(1).copied().unwrap_or(0),
            parts.get(2).copied().unwrap_or(0),
            label,
        ))
    }

    /// Build a version from a full `version[-label][+build]` token sequence
    pub fn parse(tokens: &[Token]) -> Result<Version> {
        let (version_tokens, label_tokens) = split_version(tokens)
            .ok_or_else(|| RangeError::malformed_version(render_tokens(tokens), "invalid label"))?;
        Self::build(version_tokens, label_tokens)
    }

    /// Check the shape of a full version token sequence without building it
    pub fn accepts(tokens: &[Token]) -> bool {
        match split_version(tokens) {
            Some((version_tokens, label_tokens)) => is_version_shape(version_tokens) && is_label_shape(label_tokens),
            None => false,
        }
    }

    /// Number of numeric parts given in a full version token sequence
    pub fn part_count(tokens: &[Token]) -> usize {
        split_version(tokens).map_or(0, |(version_tokens, _)| (version_tokens.len() + 1) / 2)
    }
}

/// Split `version[-label][+build]` into the numeric tokens and the label tokens
///
/// The dash before a label is dropped; a build metadata token stays with the
/// label tokens. Returns `None` when a dash is not followed by a label.
pub(crate) fn split_version(tokens: &[Token]) -> Option<(&[Token], &[Token])> {
    let split = tokens
        .iter()
        .position(|t| t.is(TokenType::DashSeparator) || t.is(TokenType::BuildMetadata));

    match split {
        None => Some((tokens, &tokens[tokens.len()..])),
        Some(i) if tokens[i].is(TokenType::BuildMetadata) => Some((&tokens[..i], &tokens[i..])),
        Some(i) => {
            let label = &tokens[i + 1..];
            if label.first().map_or(false, |t| t.is(TokenType::LabelString)) {
                Some((&tokens[..i], label))
            } else {
                None
            }
        }
    }
}

/// Split `1.2.*`-style tokens into the concrete prefix and the number of wildcard parts
pub(crate) fn split_wildcard_suffix(tokens: &[Token]) -> Result<(&[Token], usize)> {
    let malformed = |reason: &str| RangeError::malformed_version(render_tokens(tokens), reason);

    if tokens.len() % 2 == 0 {
        return Err(malformed("expected major[.minor[.patch]]"));
    }

    let mut concrete = 0;
    let mut wildcards = 0;
    for (i, token) in tokens.iter().enumerate() {
        if i % 2 == 1 {
            if !token.is(TokenType::DotSeparator) {
                return Err(malformed("expected a dot separator"));
            }
            continue;
        }
        match token.kind() {
            TokenType::Digits if wildcards > 0 => {
                return Err(malformed("a wildcard part cannot be followed by a numeric part"));
            }
            TokenType::Digits => concrete += 1,
            TokenType::WildcardDigits => wildcards += 1,
            _ => return Err(malformed("expected a numeric or wildcard part")),
        }
    }

    if concrete + wildcards > 3 {
        return Err(malformed("too many version parts"));
    }

    let end = if concrete == 0 { 0 } else { concrete * 2 - 1 };
    Ok((&tokens[..end], wildcards))
}

fn is_version_shape(tokens: &[Token]) -> bool {
    matches!(tokens.len(), 1 | 3 | 5)
        && tokens.iter().enumerate().all(|(i, t)| {
            if i % 2 == 0 {
                t.is(TokenType::Digits)
            } else {
                t.is(TokenType::DotSeparator)
            }
        })
}

fn strip_build_metadata(tokens: &[Token]) -> (&[Token], Option<&Token>) {
    match tokens.split_last() {
        Some((last, rest)) if last.is(TokenType::BuildMetadata) => (rest, Some(last)),
        _ => (tokens, None),
    }
}

fn is_label_shape(tokens: &[Token]) -> bool {
    let (label, _) = strip_build_metadata(tokens);
    match label {
        [] => true,
        [name] => name.is(TokenType::LabelString),
        [name, dot, number] => {
            name.is(TokenType::LabelString) && dot.is(TokenType::DotSeparator) && number.is(TokenType::Digits)
        }
        _ => false,
    }
}

fn build_label(tokens: &[Token]) -> Result<Label> {
    if !is_label_shape(tokens) {
        return Err(RangeError::malformed_version(
            render_tokens(tokens),
            "expected label[.number]",
        ));
    }

    let (label, build) = strip_build_metadata(tokens);
    let mut builder = Label::builder();
    match label {
        [name] => builder = builder.name(name.value()),
        [name, _, number] => builder = builder.name(name.value()).numeric_version(number.number()?),
        _ => {}
    }
    if let Some(build) = build {
        builder = builder.build_metadata(build.value().trim_start_matches('+'));
    }

    builder.build()
}
