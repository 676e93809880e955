use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::{BumpType, Platform};
use crate::error::{Result, VersionError};

/// Environment variable overriding the configured bump type
pub const BUMP_TYPE_ENV: &str = "VERSION_BUMP_TYPE";

/// Project configuration file name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "versions.toml";

/// Raw configuration as written in `versions.toml`.
///
/// Values stay as strings here so that an invalid value is reported with the
/// same message whether it came from the file, the environment or a flag.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub bump_type: Option<String>,

    #[serde(default)]
    pub tag_pattern: Option<String>,

    #[serde(default)]
    pub platform: Option<String>,
}

/// Values given on the command line, taking precedence over everything else
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsOverrides {
    pub bump_type: Option<String>,
    pub tag_pattern: Option<String>,
    pub platform: Option<String>,
}

/// Validated settings for one derivation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    pub bump_type: BumpType,
    pub platform: Platform,
    pub tag_pattern: Option<String>,
}

impl Settings {
    /// Resolve settings from flags, the `VERSION_BUMP_TYPE` environment
    /// variable and the configuration file, in that order of precedence.
    pub fn resolve(config: &Config, overrides: &SettingsOverrides) -> Result<Self> {
        let from_env = std::env::var(BUMP_TYPE_ENV).ok();
        Self::resolve_with_env(config, overrides, from_env.as_deref())
    }

    /// Same as [`Settings::resolve`] with the environment value passed in.
    /// An empty environment value counts as unset.
    pub fn resolve_with_env(
        config: &Config,
        overrides: &SettingsOverrides,
        bump_type_env: Option<&str>,
    ) -> Result<Self> {
        let bump_type = overrides
            .bump_type
            .as_deref()
            .or(bump_type_env.filter(|v| !v.is_empty()))
            .or(config.bump_type.as_deref())
            .map(BumpType::parse)
            .transpose()?
            .unwrap_or_default();

        let platform = overrides
            .platform
            .as_deref()
            .or(config.platform.as_deref())
            .map(str::parse::<Platform>)
            .transpose()?
            .unwrap_or_default();

        let tag_pattern = overrides
            .tag_pattern
            .clone()
            .or_else(|| config.tag_pattern.clone())
            .filter(|p| !p.is_empty());

        tracing::debug!(
            "Resolved settings: bump_type={}, platform={}, tag_pattern={:?}",
            bump_type,
            platform,
            tag_pattern
        );

        Ok(Settings {
            bump_type,
            platform,
            tag_pattern,
        })
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `versions.toml` in current directory
/// 3. `.versions.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        read_config_file(Path::new(path))?
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        read_config_file(Path::new(CONFIG_FILE_NAME))?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if config_path.exists() {
            read_config_file(&config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}

fn read_config_file(path: &Path) -> Result<String> {
    tracing::debug!("Reading configuration from {}", path.display());
    fs::read_to_string(path).map_err(|e| {
        VersionError::config(format!("Cannot read '{}': {}", path.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overrides(bump_type: Option<&str>) -> SettingsOverrides {
        SettingsOverrides {
            bump_type: bump_type.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults() {
        let settings =
            Settings::resolve_with_env(&Config::default(), &SettingsOverrides::default(), None)
                .unwrap();
        assert_eq!(settings.bump_type, BumpType::None);
        assert_eq!(settings.platform, Platform::Android);
        assert_eq!(settings.tag_pattern, None);
    }

    #[test]
    fn test_flag_beats_env_and_file() {
        let config = Config {
            bump_type: Some("major".to_string()),
            ..Default::default()
        };
        let settings =
            Settings::resolve_with_env(&config, &overrides(Some("patch")), Some("minor")).unwrap();
        assert_eq!(settings.bump_type, BumpType::Patch);
    }

    #[test]
    fn test_env_beats_file() {
        let config = Config {
            bump_type: Some("major".to_string()),
            ..Default::default()
        };
        let settings = Settings::resolve_with_env(&config, &overrides(None), Some("minor")).unwrap();
        assert_eq!(settings.bump_type, BumpType::Minor);
    }

    #[test]
    fn test_empty_env_is_ignored() {
        let config = Config {
            bump_type: Some("major".to_string()),
            ..Default::default()
        };
        let settings = Settings::resolve_with_env(&config, &overrides(None), Some("")).unwrap();
        assert_eq!(settings.bump_type, BumpType::Major);
    }

    #[test]
    fn test_invalid_bump_type_from_any_source() {
        let bad_file = Config {
            bump_type: Some("banana".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            Settings::resolve_with_env(&bad_file, &overrides(None), None),
            Err(VersionError::InvalidBumpType(_))
        ));
        assert!(matches!(
            Settings::resolve_with_env(&Config::default(), &overrides(None), Some("banana")),
            Err(VersionError::InvalidBumpType(_))
        ));
        assert!(matches!(
            Settings::resolve_with_env(&Config::default(), &overrides(Some("banana")), None),
            Err(VersionError::InvalidBumpType(_))
        ));
    }

    #[test]
    fn test_invalid_platform() {
        let config = Config {
            platform: Some("windows".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            Settings::resolve_with_env(&config, &overrides(None), None),
            Err(VersionError::InvalidPlatform(_))
        ));
    }

    #[test]
    fn test_tag_pattern_precedence() {
        let config = Config {
            tag_pattern: Some("v*".to_string()),
            ..Default::default()
        };
        let from_file = Settings::resolve_with_env(&config, &overrides(None), None).unwrap();
        assert_eq!(from_file.tag_pattern.as_deref(), Some("v*"));

        let flags = SettingsOverrides {
            tag_pattern: Some("release-*".to_string()),
            ..Default::default()
        };
        let from_flag = Settings::resolve_with_env(&config, &flags, None).unwrap();
        assert_eq!(from_flag.tag_pattern.as_deref(), Some("release-*"));
    }

    #[test]
    fn test_parse_config_file() {
        let config: Config = toml::from_str(
            r#"
bump_type = "minor"
tag_pattern = "v*"
platform = "ios"
"#,
        )
        .unwrap();
        assert_eq!(config.bump_type.as_deref(), Some("minor"));
        assert_eq!(config.tag_pattern.as_deref(), Some("v*"));
        assert_eq!(config.platform.as_deref(), Some("ios"));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(toml::from_str::<Config>("bump = \"minor\"").is_err());
    }
}
