use crate::error::{Result, VersionError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Short version (`major.minor.patch`) of a build
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct ShortVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl ShortVersion {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        ShortVersion {
            major,
            minor,
            patch,
        }
    }

    /// Parse a dotted version without ever failing.
    ///
    /// Components are read by their leading digits, so `"3-beta"` reads as 3.
    /// Missing or non-numeric components are 0 and anything past the third
    /// component is ignored:
    ///
    /// ```
    /// # use define_versions::domain::ShortVersion;
    /// assert_eq!(ShortVersion::parse_lenient("0.9.5"), ShortVersion::new(0, 9, 5));
    /// assert_eq!(ShortVersion::parse_lenient("2"), ShortVersion::new(2, 0, 0));
    /// assert_eq!(ShortVersion::parse_lenient(""), ShortVersion::new(0, 0, 0));
    /// ```
    pub fn parse_lenient(version: &str) -> Self {
        let mut parts = version.split('.').map(leading_number);
        ShortVersion {
            major: parts.next().unwrap_or(0),
            minor: parts.next().unwrap_or(0),
            patch: parts.next().unwrap_or(0),
        }
    }

    /// Whether the version has left the `0.x` series
    pub fn is_released(&self) -> bool {
        self.major >= 1
    }

    /// Bump version according to bump type
    pub fn bump(&self, bump_type: BumpType) -> Self {
        match bump_type {
            BumpType::Major => ShortVersion {
                major: self.major.saturating_add(1),
                minor: 0,
                patch: 0,
            },
            BumpType::Minor => ShortVersion {
                major: self.major,
                minor: self.minor.saturating_add(1),
                patch: 0,
            },
            BumpType::Patch => ShortVersion {
                major: self.major,
                minor: self.minor,
                patch: self.patch.saturating_add(1),
            },
            BumpType::None => *self,
        }
    }
}

impl fmt::Display for ShortVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Which component of the short version to increment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BumpType {
    Major,
    Minor,
    Patch,
    #[default]
    None,
}

impl BumpType {
    pub const ALLOWED: [&'static str; 4] = ["major", "minor", "patch", "none"];

    /// Parse a bump type, rejecting anything outside [`BumpType::ALLOWED`]
    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl FromStr for BumpType {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "major" => Ok(BumpType::Major),
            "minor" => Ok(BumpType::Minor),
            "patch" => Ok(BumpType::Patch),
            "none" => Ok(BumpType::None),
            other => Err(VersionError::InvalidBumpType(other.to_string())),
        }
    }
}

impl fmt::Display for BumpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BumpType::Major => "major",
            BumpType::Minor => "minor",
            BumpType::Patch => "patch",
            BumpType::None => "none",
        };
        f.write_str(name)
    }
}

/// Bump a dotted version string and return it in canonical form.
///
/// Never fails: input is read with [`ShortVersion::parse_lenient`].
pub fn bump(version: &str, bump_type: BumpType) -> String {
    ShortVersion::parse_lenient(version).bump(bump_type).to_string()
}

/// Read the leading decimal digits of `s` (after optional whitespace and `+`).
/// No digits, or a negative sign, reads as 0. Overlong values saturate.
pub(crate) fn leading_number(s: &str) -> u64 {
    let s = s.trim_start();
    let s = s.strip_prefix('+').unwrap_or(s);
    s.bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u64, |acc, digit| {
            acc.saturating_mul(10).saturating_add(u64::from(digit - b'0'))
        })
}
