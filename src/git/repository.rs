use crate::error::{Result, VersionError};
use crate::git::TagSource;
use git2::{ErrorCode, Oid, Repository, Sort};
use std::collections::HashMap;
use std::path::Path;

/// Tag source backed by a git repository on disk
pub struct Git2TagSource {
    repo: Repository,
}

impl Git2TagSource {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path.as_ref()).map_err(|e| {
            VersionError::Git(git2::Error::from_str(&format!(
                "Not in a git repository ({}): {}",
                path.as_ref().display(),
                e.message()
            )))
        })?;

        Ok(Git2TagSource { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Repository) -> Self {
        Git2TagSource { repo }
    }

    /// Map every tag matching `pattern` to the commit it points at.
    ///
    /// When several tags point at the same commit the greatest name wins.
    fn tagged_commits(&self, pattern: Option<&str>) -> Result<HashMap<Oid, String>> {
        let names = self.repo.tag_names(pattern)?;
        let mut tagged: HashMap<Oid, String> = HashMap::new();

        for name in names.iter().flatten() {
            let reference_name = format!("refs/tags/{}", name);
            let commit = match self
                .repo
                .find_reference(&reference_name)
                .and_then(|reference| reference.peel_to_commit())
            {
                Ok(commit) => commit,
                Err(e) => {
                    tracing::debug!("Skipping tag '{}': {}", name, e.message());
                    continue;
                }
            };

            let entry = tagged.entry(commit.id()).or_insert_with(|| name.to_string());
            if name > entry.as_str() {
                *entry = name.to_string();
            }
        }

        Ok(tagged)
    }
}

impl TagSource for Git2TagSource {
    /// Nearest tag reachable from `HEAD`, like `git describe --tags --abbrev=0`
    fn last_tag(&self, pattern: Option<&str>) -> Result<Option<String>> {
        let head = match self.repo.head() {
            Ok(head) => head,
            Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => {
                tracing::debug!("Repository has no HEAD commit yet");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let mut tagged = self.tagged_commits(pattern)?;
        if tagged.is_empty() {
            tracing::debug!("No tags match pattern {:?}", pattern);
            return Ok(None);
        }

        let head_oid = head.peel_to_commit()?.id();
        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push(head_oid)?;

        for oid_result in revwalk {
            let oid = oid_result?;
            if let Some(name) = tagged.remove(&oid) {
                tracing::debug!("Last tag reachable from HEAD: {}", name);
                return Ok(Some(name));
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn commit(repo: &Repository, message: &str) -> Oid {
        let sig = git2::Signature::now("Test", "test@example.com").unwrap();
        let tree_id = repo.index().unwrap().write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let parents = match repo.head() {
            Ok(head) => vec![head.peel_to_commit().unwrap()],
            Err(_) => vec![],
        };
        let parent_refs: Vec<&git2::Commit> = parents.iter().collect();
        repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
            .unwrap()
    }

    fn tag(repo: &Repository, name: &str, oid: Oid) {
        let object = repo.find_object(oid, None).unwrap();
        repo.tag_lightweight(name, &object, false).unwrap();
    }

    #[test]
    fn test_unborn_head_has_no_tag() {
        let dir = TempDir::new().unwrap();
        Repository::init(dir.path()).unwrap();

        let source = Git2TagSource::open(dir.path()).unwrap();
        assert_eq!(source.last_tag(None).unwrap(), None);
    }

    #[test]
    fn test_untagged_repository_has_no_tag() {
        let dir = TempDir::new().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        commit(&repo, "initial");

        let source = Git2TagSource::from_git2(repo);
        assert_eq!(source.last_tag(None).unwrap(), None);
    }

    #[test]
    fn test_nearest_tag_wins() {
        let dir = TempDir::new().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        let first = commit(&repo, "first");
        tag(&repo, "v0.1.0#1-aaa", first);
        let second = commit(&repo, "second");
        tag(&repo, "v0.2.0#2-bbb", second);
        commit(&repo, "third");

        let source = Git2TagSource::from_git2(repo);
        assert_eq!(
            source.last_tag(None).unwrap().as_deref(),
            Some("v0.2.0#2-bbb")
        );
    }

    #[test]
    fn test_pattern_filters_tags() {
        let dir = TempDir::new().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        let first = commit(&repo, "first");
        tag(&repo, "v0.1.0#1-aaa", first);
        let second = commit(&repo, "second");
        tag(&repo, "nightly", second);

        let source = Git2TagSource::from_git2(repo);
        assert_eq!(source.last_tag(None).unwrap().as_deref(), Some("nightly"));
        assert_eq!(
            source.last_tag(Some("v*")).unwrap().as_deref(),
            Some("v0.1.0#1-aaa")
        );
        assert_eq!(source.last_tag(Some("rc-*")).unwrap(), None);
    }

    #[test]
    fn test_pattern_character_class() {
        let dir = TempDir::new().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        let first = commit(&repo, "first");
        tag(&repo, "v0.4.2#5-x", first);
        let second = commit(&repo, "second");
        tag(&repo, "v2.0#1-a", second);

        let source = Git2TagSource::from_git2(repo);
        assert_eq!(
            source.last_tag(Some("v[01].*")).unwrap().as_deref(),
            Some("v0.4.2#5-x")
        );
    }
}
