//! Command-line workflow, kept apart from argument parsing in `main.rs`.

pub mod orchestration;

pub use orchestration::{run_define_versions, DefineVersionsArgs, WorkflowResult};
