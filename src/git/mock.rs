use crate::domain::TagPattern;
use crate::error::Result;
use crate::git::TagSource;
use std::cell::Cell;

/// Mock tag source for testing without a git repository.
///
/// Tags are kept in creation order; the last matching one is the most recent.
#[derive(Debug, Default)]
pub struct MockTagSource {
    tags: Vec<String>,
    lookups: Cell<usize>,
}

impl MockTagSource {
    /// Create a new mock with no tags
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock holding the given tags, oldest first
    pub fn with_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MockTagSource {
            tags: tags.into_iter().map(Into::into).collect(),
            lookups: Cell::new(0),
        }
    }

    /// Add a tag as the most recent one
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.push(name.into());
    }

    /// Number of times `last_tag` has been called
    pub fn lookups(&self) -> usize {
        self.lookups.get()
    }
}

impl TagSource for MockTagSource {
    fn last_tag(&self, pattern: Option<&str>) -> Result<Option<String>> {
        self.lookups.set(self.lookups.get() + 1);

        let pattern = pattern.map(TagPattern::new);
        for tag in self.tags.iter().rev() {
            let matched = match &pattern {
                Some(p) => p.matches(tag)?,
                None => true,
            };
            if matched {
                return Ok(Some(tag.clone()));
            }
        }
        Ok(None)
    }
}
