//! Tag lookup abstraction layer
//!
//! Version derivation only needs one thing from source control: the most
//! recent tag. The [TagSource] trait captures that, with two implementations:
//!
//! - [repository::Git2TagSource]: reads a real repository through `git2`
//! - [mock::MockTagSource]: an in-memory tag list for tests
//!
//! ```rust
//! # use define_versions::git::{MockTagSource, TagSource};
//! let tags = MockTagSource::with_tags(["v0.1.0#1-a", "v0.2.0#2-b"]);
//! assert_eq!(tags.last_tag(None).unwrap().as_deref(), Some("v0.2.0#2-b"));
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockTagSource;
pub use repository::Git2TagSource;

use crate::error::Result;

/// Source of the most recent release tag
pub trait TagSource {
    /// Most recent tag matching an optional glob `pattern`
    /// (`*`, `?` and `[...]` classes, as git matches tag names).
    ///
    /// # Returns
    /// * `Ok(Some(tag))` - Name of the most recent matching tag
    /// * `Ok(None)` - If no tag exists (or none matches)
    /// * `Err` - If the underlying source fails
    fn last_tag(&self, pattern: Option<&str>) -> Result<Option<String>>;
}
