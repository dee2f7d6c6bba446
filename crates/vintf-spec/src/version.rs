//! Version numbers used by manifests and compatibility matrices.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// A `MAJOR.MINOR` version, used for HAL versions and sepolicy versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Version {
    pub major: usize,
    pub minor: usize,
}

impl Version {
    /// Creates a new version.
    pub const fn new(major: usize, minor: usize) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for Version {
    type Err = ValueError;

    /// Parses `MAJOR.MINOR`. A bare `MAJOR` is read as `MAJOR.0`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ValueError::new("version", s);
        match s.split_once('.') {
            Some((major, minor)) => Ok(Version::new(
                parse_number(major).ok_or_else(err)?,
                parse_number(minor).ok_or_else(err)?,
            )),
            None => Ok(Version::new(parse_number(s).ok_or_else(err)?, 0)),
        }
    }
}

/// A range of minor versions within a single major version.
///
/// Written as `MAJOR.MIN` (a single minor) or `MAJOR.MIN-MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VersionRange {
    pub major: usize,
    pub min_minor: usize,
    pub max_minor: usize,
}

impl VersionRange {
    /// Creates a range covering exactly one minor version.
    pub const fn exact(major: usize, minor: usize) -> Self {
        Self {
            major,
            min_minor: minor,
            max_minor: minor,
        }
    }

    /// Creates a range spanning `min_minor..=max_minor`.
    pub const fn new(major: usize, min_minor: usize, max_minor: usize) -> Self {
        Self {
            major,
            min_minor,
            max_minor,
        }
    }

    /// Lowest version in the range.
    pub fn min_version(&self) -> Version {
        Version::new(self.major, self.min_minor)
    }

    /// Highest version in the range.
    pub fn max_version(&self) -> Version {
        Version::new(self.major, self.max_minor)
    }

    /// True if `version` lies within the range, inclusive on both ends.
    pub fn contains(&self, version: Version) -> bool {
        version.major == self.major
            && version.minor >= self.min_minor
            && version.minor <= self.max_minor
    }

    /// True if a provider at `version` satisfies this requirement.
    ///
    /// Minor versions are backwards compatible, so anything at or above
    /// the range minimum with the same major version qualifies.
    pub fn supported_by(&self, version: Version) -> bool {
        version.major == self.major && version.minor >= self.min_minor
    }
}

impl From<Version> for VersionRange {
    fn from(version: Version) -> Self {
        VersionRange::exact(version.major, version.minor)
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min_minor == self.max_minor {
            write!(f, "{}.{}", self.major, self.min_minor)
        } else {
            write!(f, "{}.{}-{}", self.major, self.min_minor, self.max_minor)
        }
    }
}

impl FromStr for VersionRange {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ValueError::new("version range", s);
        match s.split_once('-') {
            Some((min, max)) => {
                let min: Version = min.parse().map_err(|_| err())?;
                let max_minor = parse_number(max).ok_or_else(err)?;
                if max_minor < min.minor {
                    return Err(err());
                }
                Ok(VersionRange::new(min.major, min.minor, max_minor))
            }
            None => {
                let version: Version = s.parse().map_err(|_| err())?;
                Ok(version.into())
            }
        }
    }
}

/// Kernel sepolicy (policydb) version, a plain integer such as `30`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct KernelSepolicyVersion(pub usize);

impl fmt::Display for KernelSepolicyVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for KernelSepolicyVersion {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_number(s)
            .map(KernelSepolicyVersion)
            .ok_or_else(|| ValueError::new("kernel sepolicy version", s))
    }
}

/// Digits only; rejects signs, whitespace and empty input.
fn parse_number(s: &str) -> Option<usize> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
