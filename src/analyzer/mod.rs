pub mod version_deriver;

pub use version_deriver::{Derivation, VersionDeriver};
