//! Pre-release labels and their precedence

use std::fmt;

use crate::error::{RangeError, Result};

/// Precedence tier of a pre-release label
///
/// Variants are declared from lowest to highest, so the derived ordering is
/// the label ordering. `Absent` (a release without label) sorts above every
/// pre-release of the same `major.minor.patch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    Dev,
    Alpha,
    Beta,
    Rc,
    Absent,
}

impl Precedence {
    /// Map a label name to its precedence; unknown names are development labels
    pub fn from_name(name: &str) -> Self {
        if name.is_empty() {
            return Precedence::Absent;
        }
        match name.to_ascii_lowercase().as_str() {
            "alpha" | "a" => Precedence::Alpha,
            "beta" | "b" => Precedence::Beta,
            "rc" => Precedence::Rc,
            _ => Precedence::Dev,
        }
    }

    /// Canonical spelling for the known label kinds
    pub fn canonical_name(&self) -> Option<&'static str> {
        match self {
            Precedence::Alpha => Some("alpha"),
            Precedence::Beta => Some("beta"),
            Precedence::Rc => Some("rc"),
            Precedence::Dev | Precedence::Absent => None,
        }
    }
}

impl fmt::Display for Precedence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Precedence::Dev => "dev",
            Precedence::Alpha => "alpha",
            Precedence::Beta => "beta",
            Precedence::Rc => "rc",
            Precedence::Absent => "stable",
        };
        write!(f, "{}", name)
    }
}

/// An immutable pre-release label, e.g. `rc.2` or `my_branch`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Label {
    precedence: Precedence,
    name: String,
    numeric_version: Option<u64>,
    build_metadata: Option<String>,
}

impl Label {
    /// The label of a release version
    pub fn absent() -> Self {
        Label {
            precedence: Precedence::Absent,
            name: String::new(),
            numeric_version: None,
            build_metadata: None,
        }
    }

    pub fn builder() -> LabelBuilder {
        LabelBuilder::default()
    }

    pub fn precedence(&self) -> Precedence {
        self.precedence
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn numeric_version(&self) -> Option<u64> {
        self.numeric_version
    }

    pub fn build_metadata(&self) -> Option<&str> {
        self.build_metadata.as_deref()
    }

    pub fn is_absent(&self) -> bool {
        self.precedence == Precedence::Absent
    }
}

impl Default for Label {
    fn default() -> Self {
        Self::absent()
    }
}

/// Renders the pre-release part only (`rc.2`); build metadata is rendered by the version
impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(n) = self.numeric_version {
            write!(f, ".{}", n)?;
        }
        Ok(())
    }
}

/// Builder consumed once to produce a [`Label`]
#[derive(Debug, Clone, Default)]
pub struct LabelBuilder {
    name: String,
    numeric_version: Option<u64>,
    build_metadata: Option<String>,
}

impl LabelBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn numeric_version(mut self, numeric_version: u64) -> Self {
        self.numeric_version = Some(numeric_version);
        self
    }

    pub fn build_metadata(mut self, build_metadata: impl Into<String>) -> Self {
        self.build_metadata = Some(build_metadata.into());
        self
    }

    /// Fails with `IntegerOverflow` when a fused number (`rc99999999999999999999`) does not fit in 64 bits
    pub fn build(self) -> Result<Label> {
        let build_metadata = self.build_metadata.filter(|m| !m.is_empty());

        if self.name.is_empty() {
            return Ok(Label {
                build_metadata,
                ..Label::absent()
            });
        }

        let (name, numeric_version) = match self.numeric_version {
            Some(n) => (self.name, Some(n)),
            None => split_fused_number(self.name)?,
        };

        let precedence = Precedence::from_name(&name);
        let name = precedence
            .canonical_name()
            .map(str::to_string)
            .unwrap_or(name);

        Ok(Label {
            precedence,
            name,
            numeric_version,
            build_metadata,
        })
    }
}

/// `rc2` -> (`rc`, 2) for the known label kinds; anything else is kept whole
fn split_fused_number(name: String) -> Result<(String, Option<u64>)> {
    let split_at = name.trim_end_matches(|c: char| c.is_ascii_digit()).len();
    if split_at == 0 || split_at == name.len() {
        return Ok((name, None));
    }

    let (prefix, digits) = name.split_at(split_at);
    if Precedence::from_name(prefix) == Precedence::Dev {
        return Ok((name, None));
    }

    let n = digits.parse().map_err(|_| RangeError::IntegerOverflow {
        value: digits.to_string(),
    })?;
    Ok((prefix.to_string(), Some(n)))
}
