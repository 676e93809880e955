use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use define_versions::cli::{run_define_versions, DefineVersionsArgs};
use define_versions::config::SettingsOverrides;
use define_versions::output::OutputFormat;
use define_versions::{ui, VersionError};

#[derive(clap::Parser)]
#[command(
    name = "define-versions",
    about = "Derive the short version and build number of the next build from the last git tag"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(
        short,
        long,
        help = "Version component to bump: major, minor, patch or none [env: VERSION_BUMP_TYPE]"
    )]
    bump_type: Option<String>,

    #[arg(long, help = "Only consider tags matching this glob pattern")]
    tag_pattern: Option<String>,

    #[arg(long, help = "Target platform: android or ios")]
    platform: Option<String>,

    #[arg(long, help = "Short version declared by the project (ios only)")]
    project_version: Option<String>,

    #[arg(long, default_value = ".", help = "Path inside the git repository")]
    repo: PathBuf,

    #[arg(long, default_value = "env", help = "Output format: env or toml")]
    format: String,

    #[arg(short, long, help = "Write outputs to this file instead of stdout")]
    output: Option<PathBuf>,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.version {
        println!("define-versions {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let format: OutputFormat = match args.format.parse() {
        Ok(format) => format,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let workflow_args = DefineVersionsArgs {
        config_path: args.config,
        overrides: SettingsOverrides {
            bump_type: args.bump_type,
            tag_pattern: args.tag_pattern,
            platform: args.platform,
        },
        project_version: args.project_version,
        repo_path: args.repo,
        format,
        output_path: args.output,
    };

    ui::display_status("Deriving versions from the last git tag...");
    let result = match run_define_versions(&workflow_args) {
        Ok(result) => result,
        Err(e) => {
            match e.downcast_ref::<VersionError>() {
                Some(err) if err.is_user_error() => ui::display_error(&err.to_string()),
                _ => ui::display_error(&format!("Failed to define versions: {:#}", e)),
            }
            std::process::exit(1);
        }
    };

    ui::report_derivation(&result.derivation);
    if let Some(path) = &workflow_args.output_path {
        ui::display_success(&format!("Outputs written to {}", path.display()));
    }

    Ok(())
}
