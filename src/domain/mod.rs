//! Domain logic - pure version and commit rules independent of git operations

pub mod change;
pub mod commit;
pub mod version;

pub use change::{ChangeType, IncrementType};
pub use commit::{classify_header, Commit, CommitAuthor};
pub use version::{apply_increment, parse_version};
