use std::cell::RefCell;
use std::collections::HashMap;

use crate::domain::Commit;
use crate::error::{GitBumpError, Result};

/// Mock repository for testing without actual git operations.
///
/// Seeded with tags, a full history, and per-tag "commits since" lists.
/// Every mutating call is recorded so tests can assert exactly which side
/// effects happened (or, under dry-run, that none did). A single operation
/// can be armed to fail for abort-sequence tests.
pub struct MockRepository {
    tags: Vec<String>,
    history: Vec<Commit>,
    commits_since: HashMap<String, Vec<Commit>>,
    calls: RefCell<Vec<String>>,
    fail_on: Option<String>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            tags: Vec::new(),
            history: Vec::new(),
            commits_since: HashMap::new(),
            calls: RefCell::new(Vec::new()),
            fail_on: None,
        }
    }

    /// Add a raw tag name
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.push(name.into());
    }

    /// Append a commit to the full history
    pub fn add_commit(&mut self, commit: Commit) {
        self.history.push(commit);
    }

    /// Set the commits returned for the range `tag..HEAD`
    pub fn set_commits_since(&mut self, tag: impl Into<String>, commits: Vec<Commit>) {
        self.commits_since.insert(tag.into(), commits);
    }

    /// Arm one operation (e.g. "create_tag") to fail when invoked
    pub fn fail_on(&mut self, operation: impl Into<String>) {
        self.fail_on = Some(operation.into());
    }

    /// Mutating calls performed so far, in invocation order
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, operation: &str, detail: String) -> Result<()> {
        if self.fail_on.as_deref() == Some(operation) {
            return Err(GitBumpError::remote(format!(
                "injected failure in {}",
                operation
            )));
        }

        self.calls.borrow_mut().push(detail);
        Ok(())
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl super::Repository for MockRepository {
    fn list_tags(&self) -> Result<Vec<String>> {
        Ok(self.tags.clone())
    }

    fn log_commits(&self, range_start: Option<&str>, _range_end: &str) -> Result<Vec<Commit>> {
        match range_start {
            Some(tag) => self
                .commits_since
                .get(tag)
                .cloned()
                .ok_or_else(|| GitBumpError::tag(format!("unknown revision: {}", tag))),
            None => Ok(self.history.clone()),
        }
    }

    fn commit_all(&self, message: &str) -> Result<()> {
        self.record("commit_all", format!("commit_all {}", message))
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        self.record("create_tag", format!("create_tag {}", name))
    }

    fn push_branch(&self) -> Result<()> {
        self.record("push_branch", "push_branch".to_string())
    }

    fn push_ref(&self, name: &str) -> Result<()> {
        self.record("push_ref", format!("push_ref {}", name))
    }
}
