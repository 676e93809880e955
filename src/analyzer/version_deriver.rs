use crate::boundary::DerivationWarning;
use crate::config::Settings;
use crate::domain::{
    extract_build_number, extract_short_version, BumpType, Platform, ShortVersion, VersionTag,
};
use crate::error::Result;
use crate::git::TagSource;
use crate::metadata::ProjectMetadata;
use crate::output::VersionOutputs;

/// Outcome of one derivation: the published values plus any warnings
#[derive(Debug, Clone, PartialEq)]
pub struct Derivation {
    pub outputs: VersionOutputs,
    pub warnings: Vec<DerivationWarning>,
}

/// Derives the short version and build number of the next build
#[derive(Debug, Clone, Default)]
pub struct VersionDeriver {
    bump_type: BumpType,
    platform: Platform,
    tag_pattern: Option<String>,
}

impl VersionDeriver {
    /// Create a deriver for Android-style projects with no tag pattern
    pub fn new(bump_type: BumpType) -> Self {
        VersionDeriver {
            bump_type,
            ..Default::default()
        }
    }

    /// Create a deriver from resolved settings
    pub fn from_settings(settings: &Settings) -> Self {
        VersionDeriver {
            bump_type: settings.bump_type,
            platform: settings.platform,
            tag_pattern: settings.tag_pattern.clone(),
        }
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn with_tag_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.tag_pattern = Some(pattern.into());
        self
    }

    /// Derive the outputs for this build.
    ///
    /// The build number is always the last tag's build number plus one.
    /// The short version is bumped only while the project is pre-1.0; from
    /// 1.0.0 on it is published unchanged whatever the bump type.
    pub fn derive<T, M>(&self, tags: &T, metadata: &M) -> Result<Derivation>
    where
        T: TagSource + ?Sized,
        M: ProjectMetadata + ?Sized,
    {
        let mut warnings = Vec::new();

        // Read once; both values come from the same tag
        let last_tag = tags.last_tag(self.tag_pattern.as_deref())?;
        match last_tag.as_deref() {
            Some(tag) => {
                tracing::debug!("Last tag: {}", tag);
                if VersionTag::new(tag).recorded_build_number().is_none() {
                    warnings.push(DerivationWarning::MissingBuildNumber {
                        tag: tag.to_string(),
                    });
                }
            }
            None => warnings.push(DerivationWarning::NoTagFound {
                pattern: self.tag_pattern.clone(),
            }),
        }

        let build_number = extract_build_number(last_tag.as_deref());
        tracing::info!("Build number: {}", build_number);

        let current = self.current_short_version(last_tag.as_deref(), metadata, &mut warnings)?;
        let parsed = ShortVersion::parse_lenient(&current);

        if parsed.is_released() {
            warnings.push(DerivationWarning::ReleasedVersionNotBumped {
                version: current.clone(),
                bump_type: self.bump_type,
            });
            return Ok(Derivation {
                outputs: VersionOutputs::new(current, build_number),
                warnings,
            });
        }

        let new_version = parsed.bump(self.bump_type).to_string();
        tracing::info!(
            "Short version: {} -> {} ({} bump)",
            current,
            new_version,
            self.bump_type
        );

        Ok(Derivation {
            outputs: VersionOutputs::new(new_version, build_number),
            warnings,
        })
    }

    fn current_short_version<M>(
        &self,
        last_tag: Option<&str>,
        metadata: &M,
        warnings: &mut Vec<DerivationWarning>,
    ) -> Result<String>
    where
        M: ProjectMetadata + ?Sized,
    {
        if self.platform.has_project_metadata() {
            match metadata.short_version()? {
                Some(version) if ShortVersion::parse_lenient(&version).is_released() => {
                    warnings.push(DerivationWarning::ProjectVersionUsed {
                        version: version.clone(),
                    });
                    return Ok(version);
                }
                Some(version) => {
                    tracing::debug!("Project version {} is pre-1.0, reading the last tag", version);
                }
                None => warnings.push(DerivationWarning::NoProjectVersion),
            }
        }

        match extract_short_version(last_tag) {
            Some(version) => Ok(version),
            None => {
                warnings.push(DerivationWarning::MissingShortVersion {
                    tag: VersionTag::or_default(last_tag).name,
                });
                Ok(String::new())
            }
        }
    }
}
