//! Project metadata lookups (plist / Xcode project versions)
//!
//! Reading those files is left to the caller; this module only defines the
//! seam the version deriver asks for a project-declared short version.

use crate::error::Result;

/// Source of the short version declared by the project itself
pub trait ProjectMetadata {
    /// Short version declared by the project, if any
    fn short_version(&self) -> Result<Option<String>>;
}

/// Project without metadata; every lookup returns `None`
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProjectMetadata;

impl ProjectMetadata for NoProjectMetadata {
    fn short_version(&self) -> Result<Option<String>> {
        Ok(None)
    }
}

/// Project version handed in by the caller
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticProjectVersion {
    version: Option<String>,
}

impl StaticProjectVersion {
    pub fn new(version: Option<String>) -> Self {
        // An empty value is treated like no value at all
        let version = version.filter(|v| !v.trim().is_empty());
        StaticProjectVersion { version }
    }
}

impl ProjectMetadata for StaticProjectVersion {
    fn short_version(&self) -> Result<Option<String>> {
        Ok(self.version.clone())
    }
}
