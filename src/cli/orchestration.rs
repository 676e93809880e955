//! Main workflow orchestration logic
//!
//! Loads configuration, reads the last tag, derives the versions and hands
//! them to the output sink. Argument parsing stays in `main.rs` so the
//! workflow can be called programmatically without clap.

use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::analyzer::{Derivation, VersionDeriver};
use crate::config::{load_config, Settings, SettingsOverrides};
use crate::git::Git2TagSource;
use crate::metadata::StaticProjectVersion;
use crate::output::{write_outputs, OutputFormat};

/// Arguments for the define-versions workflow
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DefineVersionsArgs {
    /// Path to custom config file
    pub config_path: Option<String>,

    /// Flag-level overrides of the configuration
    pub overrides: SettingsOverrides,

    /// Short version declared by the project (plist / Xcode project)
    pub project_version: Option<String>,

    /// Directory inside the git repository to read tags from
    pub repo_path: PathBuf,

    /// Serialization format of the outputs
    pub format: OutputFormat,

    /// File receiving the outputs; stdout when absent
    pub output_path: Option<PathBuf>,
}

/// Result of a successful workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// Settings the derivation ran with
    pub settings: Settings,

    /// Derived outputs and warnings
    pub derivation: Derivation,
}

/// Main define-versions workflow
///
/// 1. Load and validate configuration (fails before anything is read)
/// 2. Open the git repository
/// 3. Derive short version and build number
/// 4. Write outputs to the sink
pub fn run_define_versions(args: &DefineVersionsArgs) -> Result<WorkflowResult> {
    let config = load_config(args.config_path.as_deref())?;
    let settings = Settings::resolve(&config, &args.overrides)?;

    let tags = Git2TagSource::open(&args.repo_path)?;
    let metadata = StaticProjectVersion::new(args.project_version.clone());

    let derivation = VersionDeriver::from_settings(&settings).derive(&tags, &metadata)?;

    match &args.output_path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Cannot create output file '{}'", path.display()))?;
            write_outputs(&derivation.outputs, args.format, file)?;
            tracing::info!("Wrote outputs to {}", path.display());
        }
        None => write_outputs(&derivation.outputs, args.format, io::stdout().lock())?,
    }

    Ok(WorkflowResult {
        settings,
        derivation,
    })
}
