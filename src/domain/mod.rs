//! Domain logic - pure version rules independent of git or configuration

pub mod platform;
pub mod tag;
pub mod version;

pub use platform::Platform;
pub use tag::{
    extract_build_number, extract_short_version, TagPattern, VersionTag, DEFAULT_TAG,
    MAX_BUILD_NUMBER,
};
pub use version::{bump, BumpType, ShortVersion};
