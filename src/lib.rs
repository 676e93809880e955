pub mod analyzer;
pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod metadata;
pub mod output;
pub mod ui;

pub use analyzer::{Derivation, VersionDeriver};
pub use error::{Result, VersionError};
pub use output::VersionOutputs;
