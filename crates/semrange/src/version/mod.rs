//! Version value type

mod builder;
mod label;

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::comparator::Comparator;
use crate::error::{RangeError, Result};
use crate::lexer::tokenize;

pub use builder::VersionBuilder;
pub(crate) use builder::{split_version, split_wildcard_suffix};
pub use label::{Label, LabelBuilder, Precedence};

/// An immutable `major.minor.patch[-label][+build]` version
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    label: Label,
}

impl Version {
    /// Create a release version without label
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self::with_label(major, minor, patch, Label::absent())
    }

    pub fn with_label(major: u64, minor: u64, patch: u64, label: Label) -> Self {
        Version {
            major,
            minor,
            patch,
            label,
        }
    }

    /// Parse a concrete version string
    ///
    /// Missing minor/patch parts default to 0. Trailing wildcard parts
    /// (`1.x`, `1.2.*`) are accepted and also default to 0.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        let tokens = tokenize(input)?;

        let (version_tokens, label_tokens) = split_version(&tokens)
            .ok_or_else(|| RangeError::malformed_version(input, "invalid label"))?;

        let (concrete, wildcards) = split_wildcard_suffix(version_tokens).map_err(|e| with_input(e, input))?;
        if concrete.is_empty() {
            return Err(RangeError::malformed_version(input, "a version needs a numeric major part"));
        }
        if wildcards > 0 && !label_tokens.is_empty() {
            return Err(RangeError::malformed_version(input, "a wildcard version cannot carry a label"));
        }

        VersionBuilder::build(concrete, label_tokens).map_err(|e| with_input(e, input))
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    /// Ordering by major, minor, patch, label precedence and label number
    ///
    /// Label names and build metadata are ignored, so `Equal` here does not
    /// imply `==`.
    pub fn precedence_cmp(&self, other: &Version) -> Ordering {
        if Comparator::less_than(self, other) {
            Ordering::Less
        } else if Comparator::greater_than(self, other) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    /// `(major + 1).0.0`
    pub fn next_major(&self) -> Result<Version> {
        let major = self.major.checked_add(1).ok_or_else(|| RangeError::IntegerOverflow {
            value: self.major.to_string(),
        })?;
        Ok(Version::new(major, 0, 0))
    }

    /// `major.(minor + 1).0`
    pub fn next_minor(&self) -> Result<Version> {
        let minor = self.minor.checked_add(1).ok_or_else(|| RangeError::IntegerOverflow {
            value: self.minor.to_string(),
        })?;
        Ok(Version::new(self.major, minor, 0))
    }
}

fn with_input(err: RangeError, input: &str) -> RangeError {
    match err {
        RangeError::MalformedVersion { reason, .. } => RangeError::malformed_version(input, reason),
        other => other,
    }
}

impl FromStr for Version {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.label.is_absent() {
            write!(f, "-{}", self.label)?;
        }
        if let Some(meta) = self.label.build_metadata() {
            write!(f, "+{}", meta)?;
        }
        Ok(())
    }
}
