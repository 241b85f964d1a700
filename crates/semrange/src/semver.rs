//! Semver facade providing high-level version operations

use std::cmp::Ordering;

use crate::error::Result;
use crate::range::{Range, RangeNode};
use crate::version::Version;

/// Main facade for semantic versioning operations
pub struct Semver;

impl Semver {
    /// Parse a range expression
    pub fn parse_range(range: &str) -> Result<Range> {
        Range::parse(range)
    }

    /// Check if a version satisfies a range
    ///
    /// An unparsable version or range never satisfies.
    pub fn satisfies(version: &str, range: &str) -> bool {
        let version = match Version::parse(version) {
            Ok(v) => v,
            Err(_) => return false,
        };

        match Range::parse(range) {
            Ok(r) => r.is_satisfied_by(&version),
            Err(_) => false,
        }
    }

    /// Return all versions that satisfy the given range, in their original order
    pub fn satisfied_by(versions: &[&str], range: &str) -> Vec<String> {
        let range = match Range::parse(range) {
            Ok(r) => r,
            Err(_) => return Vec::new(),
        };

        versions
            .iter()
            .filter(|v| range.matches(v))
            .map(|v| v.to_string())
            .collect()
    }

    /// Sort versions in ascending order
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
        // Parsed versions with their original index; unparsable ones are dropped
        let mut parsed: Vec<(Version, usize)> = versions
            .iter()
            .enumerate()
            .filter_map(|(i, v)| Some((Version::parse(v).ok()?, i)))
            .collect();

        parsed.sort_by(|(a, _), (b, _)| {
            let cmp: Ordering = a.precedence_cmp(b);
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });

        parsed.into_iter().map(|(_, i)| versions[i].to_string()).collect()
    }
}
