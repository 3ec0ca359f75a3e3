use std::fs;
use std::path::PathBuf;

use crate::error::{GitBumpError, Result};

/// Real filesystem workspace rooted at a project directory
pub struct DirWorkspace {
    root: PathBuf,
}

impl DirWorkspace {
    /// Create a workspace rooted at `root`, which must be a directory
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();

        if !root.is_dir() {
            return Err(GitBumpError::workspace(format!(
                "Path is not a directory: {}",
                root.display()
            )));
        }

        Ok(DirWorkspace { root })
    }
}

impl super::Workspace for DirWorkspace {
    fn list_entries(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();

        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }

        Ok(names)
    }

    fn read_file(&self, name: &str) -> Result<String> {
        Ok(fs::read_to_string(self.root.join(name))?)
    }

    fn write_file(&self, name: &str, contents: &str) -> Result<()> {
        fs::write(self.root.join(name), contents)?;
        Ok(())
    }
}
