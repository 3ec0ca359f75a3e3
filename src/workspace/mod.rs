//! Filesystem abstraction for the repository root.
//!
//! The resolver and the bump orchestrator only ever touch files sitting
//! directly in the project root, so the interface is deliberately flat:
//! list the immediate entries, read a file, write a file.

pub mod dir;
pub mod mock;

pub use dir::DirWorkspace;
pub use mock::MockWorkspace;

use crate::error::Result;

/// Narrow filesystem capability interface
pub trait Workspace {
    /// Names of the immediate entries of the root (non-recursive)
    fn list_entries(&self) -> Result<Vec<String>>;

    /// Read a root-level file as UTF-8 text
    fn read_file(&self, name: &str) -> Result<String>;

    /// Overwrite a root-level file
    fn write_file(&self, name: &str, contents: &str) -> Result<()>;
}
