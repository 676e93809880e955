use std::fmt;

use crate::domain::{BumpType, DEFAULT_TAG};

/// Warnings raised while deriving versions from incomplete history.
/// These are non-fatal; derivation falls back to conservative defaults.
#[derive(Debug, Clone, PartialEq)]
pub enum DerivationWarning {
    /// No tag exists (or none matches the pattern)
    NoTagFound { pattern: Option<String> },
    /// Tag has no `#<build>-` section; numbering restarts at 1
    MissingBuildNumber { tag: String },
    /// Tag has no `v<version>#` section; version starts from 0.0.0
    MissingShortVersion { tag: String },
    /// Version is 1.0.0 or later, so the bump type was not applied
    ReleasedVersionNotBumped { version: String, bump_type: BumpType },
    /// Project metadata declared a released version, tag version unused
    ProjectVersionUsed { version: String },
    /// Project metadata declared no version; the tag is used instead
    NoProjectVersion,
}

impl fmt::Display for DerivationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DerivationWarning::NoTagFound { pattern } => match pattern {
                Some(pattern) => write!(
                    f,
                    "No tag matches pattern '{}', starting from '{}'",
                    pattern, DEFAULT_TAG
                ),
                None => write!(f, "No tag found, starting from '{}'", DEFAULT_TAG),
            },
            DerivationWarning::MissingBuildNumber { tag } => {
                write!(f, "Tag '{}' has no build number, using build 1", tag)
            }
            DerivationWarning::MissingShortVersion { tag } => {
                write!(f, "Tag '{}' has no short version, using 0.0.0", tag)
            }
            DerivationWarning::ReleasedVersionNotBumped { version, bump_type } => {
                write!(
                    f,
                    "Not bumping short version {} ({} requested) as it is higher or equal to 1.0.0",
                    version, bump_type
                )
            }
            DerivationWarning::ProjectVersionUsed { version } => {
                write!(f, "Using short version {} declared by the project", version)
            }
            DerivationWarning::NoProjectVersion => {
                write!(f, "No short version found in the project, relying on git tags")
            }
        }
    }
}
