//! Dotted-integer version identifiers

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::check::error::ParseError;

/// A dotted sequence of non-negative integers, e.g. "1.7.1".
///
/// This is not semver: any number of components is allowed and there is no
/// notion of prerelease or build metadata. Release numbering for a single
/// tool always follows one scheme, so two versions that reach a comparison
/// are expected to carry the same component count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    components: Vec<u64>,
}

impl Version {
    pub fn components(&self) -> &[u64] {
        &self.components
    }

    /// Compares component sequences pairwise, stopping at the first unequal
    /// pair.
    ///
    /// Sequences whose shared prefix is fully equal but whose lengths differ
    /// do not compare: zero-padding would silently equate "1.2" with "1.2.0",
    /// so the mismatch is reported as an error instead.
    pub fn compare(&self, other: &Version) -> Result<Ordering, ParseError> {
        for (a, b) in self.components.iter().zip(&other.components) {
            match a.cmp(b) {
                Ordering::Equal => continue,
                unequal => return Ok(unequal),
            }
        }

        if self.components.len() == other.components.len() {
            Ok(Ordering::Equal)
        } else {
            Err(ParseError::ComponentCountMismatch {
                left: self.to_string(),
                right: other.to_string(),
            })
        }
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseError::Empty);
        }

        let components = s
            .split('.')
            .map(|part| {
                part.parse::<u64>().map_err(|_| ParseError::InvalidComponent {
                    input: s.to_string(),
                    component: part.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { components })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut components = self.components.iter();
        if let Some(first) = components.next() {
            write!(f, "{first}")?;
        }
        for component in components {
            write!(f, ".{component}")?;
        }
        Ok(())
    }
}

/// Returns true if `current` names an older release than `latest`.
pub fn is_older(current: &str, latest: &str) -> Result<bool, ParseError> {
    let current: Version = current.parse()?;
    let latest: Version = latest.parse()?;
    Ok(current.compare(&latest)? == Ordering::Less)
}
