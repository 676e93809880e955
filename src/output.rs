//! Versions published for downstream build steps.

use crate::error::{Result, VersionError};
use serde::Serialize;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Key under which the short version is published
pub const SHORT_VERSION_STRING: &str = "SHORT_VERSION_STRING";
/// Key under which the build number is published
pub const BUILD_NUMBER: &str = "BUILD_NUMBER";

/// The two values derived for a build
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionOutputs {
    #[serde(rename = "SHORT_VERSION_STRING")]
    pub short_version: String,

    #[serde(rename = "BUILD_NUMBER")]
    pub build_number: u64,
}

impl VersionOutputs {
    pub fn new(short_version: impl Into<String>, build_number: u64) -> Self {
        VersionOutputs {
            short_version: short_version.into(),
            build_number,
        }
    }
}

/// Serialization format of the output sink
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `KEY=value` lines, safe to `source`; values outside `[0-9A-Za-z._+-]`
    /// are single-quoted
    #[default]
    Env,
    /// A TOML table
    Toml,
}

impl FromStr for OutputFormat {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "env" => Ok(OutputFormat::Env),
            "toml" => Ok(OutputFormat::Toml),
            other => Err(VersionError::output(format!(
                "Unknown output format '{}'. Allowed values are env, toml.",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Env => write!(f, "env"),
            OutputFormat::Toml => write!(f, "toml"),
        }
    }
}

/// Render outputs in the requested format
pub fn render_outputs(outputs: &VersionOutputs, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Env => Ok(format!(
            "{}={}\n{}={}\n",
            SHORT_VERSION_STRING,
            shell_quote(&outputs.short_version),
            BUILD_NUMBER,
            outputs.build_number
        )),
        OutputFormat::Toml => Ok(toml::to_string(outputs)?),
    }
}

/// Quote a value for a POSIX shell assignment.
/// Plain version text is left as is so the common case stays readable.
fn shell_quote(value: &str) -> String {
    let plain = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '+' | '-'));
    if plain {
        value.to_string()
    } else {
        format!("'{}'", value.replace('\'', r"'\''"))
    }
}

/// Write outputs to a sink (stdout, a file, ...)
pub fn write_outputs<W: Write>(
    outputs: &VersionOutputs,
    format: OutputFormat,
    mut writer: W,
) -> Result<()> {
    let rendered = render_outputs(outputs, format)?;
    writer.write_all(rendered.as_bytes())?;
    writer.flush()?;
    Ok(())
}
