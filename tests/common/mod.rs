#![allow(dead_code)]

use git2::{Oid, Repository, Signature};
use tempfile::TempDir;

/// Temporary git repository with helpers to commit and tag
pub struct TestRepo {
    pub dir: TempDir,
    pub repo: Repository,
}

impl TestRepo {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        TestRepo { dir, repo }
    }

    /// Repository with one commit per tag, each commit tagged in order
    pub fn with_tags(tags: &[&str]) -> Self {
        let test_repo = TestRepo::new();
        for tag in tags {
            let oid = test_repo.commit(&format!("release {}", tag));
            test_repo.tag(tag, oid);
        }
        test_repo
    }

    pub fn commit(&self, message: &str) -> Oid {
        let sig = Signature::now("Test", "test@example.com").unwrap();
        let tree_id = self.repo.index().unwrap().write_tree().unwrap();
        let tree = self.repo.find_tree(tree_id).unwrap();
        let parents = match self.repo.head() {
            Ok(head) => vec![head.peel_to_commit().unwrap()],
            Err(_) => vec![],
        };
        let parent_refs: Vec<&git2::Commit> = parents.iter().collect();
        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
            .unwrap()
    }

    pub fn tag(&self, name: &str, oid: Oid) {
        let object = self.repo.find_object(oid, None).unwrap();
        self.repo.tag_lightweight(name, &object, false).unwrap();
    }

    pub fn path(&self) -> &std::path::Path {
        self.dir.path()
    }
}

pub fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}
