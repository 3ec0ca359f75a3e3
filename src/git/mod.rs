//! Git operations abstraction layer
//!
//! The [Repository] trait is the narrow boundary the resolver and the bump
//! orchestrator depend on. Two implementations exist:
//!
//! - [repository::Git2Repository]: the real implementation using the `git2` crate
//! - [mock::MockRepository]: an in-memory implementation for testing
//!
//! Code should depend on the trait rather than a concrete implementation so
//! the core can be exercised with deterministic fakes.

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::domain::Commit;
use crate::error::Result;

/// Narrow git capability interface.
///
/// Every call is a bounded operation that either returns output or fails;
/// failures carry the underlying reason and are never retried by the core.
pub trait Repository {
    /// All tag names in the repository, unfiltered.
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Commits in the range `range_start..range_end`.
    ///
    /// With `range_start = None` the full history up to `range_end` is
    /// returned. Ordering is the log's native order (newest first) and must
    /// be preserved end-to-end; callers never re-sort.
    fn log_commits(&self, range_start: Option<&str>, range_end: &str) -> Result<Vec<Commit>>;

    /// Stage all working-tree changes and commit them with `message`.
    fn commit_all(&self, message: &str) -> Result<()>;

    /// Create a lightweight tag named `name` at the current HEAD.
    fn create_tag(&self, name: &str) -> Result<()>;

    /// Push the current branch to the configured remote.
    fn push_branch(&self) -> Result<()>;

    /// Push a single ref (a tag name) to the configured remote.
    fn push_ref(&self, name: &str) -> Result<()>;
}
