use thiserror::Error;

/// Unified error type for git-bump operations
#[derive(Error, Debug)]
pub enum GitBumpError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version resolution failed: {0}")]
    Resolution(String),

    #[error("Version parsing error: {0}")]
    Version(#[from] semver::Error),

    #[error("Version file error: {0}")]
    VersionFile(String),

    #[error("Workspace error: {0}")]
    Workspace(String),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("Remote operation failed: {0}")]
    Remote(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-bump
pub type Result<T> = std::result::Result<T, GitBumpError>;

impl GitBumpError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        GitBumpError::Config(msg.into())
    }

    /// Create a resolution error with context
    pub fn resolution(msg: impl Into<String>) -> Self {
        GitBumpError::Resolution(msg.into())
    }

    /// Create a version-file error with context
    pub fn version_file(msg: impl Into<String>) -> Self {
        GitBumpError::VersionFile(msg.into())
    }

    /// Create a workspace error with context
    pub fn workspace(msg: impl Into<String>) -> Self {
        GitBumpError::Workspace(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        GitBumpError::Tag(msg.into())
    }

    /// Create a remote error with context
    pub fn remote(msg: impl Into<String>) -> Self {
        GitBumpError::Remote(msg.into())
    }
}
