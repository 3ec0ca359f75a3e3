use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::error::{GitBumpError, Result};

/// In-memory workspace for testing without touching the filesystem.
///
/// Entries are kept in a BTreeMap so listing order is deterministic.
pub struct MockWorkspace {
    files: RefCell<BTreeMap<String, String>>,
}

impl MockWorkspace {
    /// Create a new empty mock workspace
    pub fn new() -> Self {
        MockWorkspace {
            files: RefCell::new(BTreeMap::new()),
        }
    }

    /// Seed a file into the workspace
    pub fn add_file(&mut self, name: impl Into<String>, contents: impl Into<String>) {
        self.files
            .borrow_mut()
            .insert(name.into(), contents.into());
    }

    /// Current contents of a file, if present
    pub fn contents(&self, name: &str) -> Option<String> {
        self.files.borrow().get(name).cloned()
    }
}

impl Default for MockWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl super::Workspace for MockWorkspace {
    fn list_entries(&self) -> Result<Vec<String>> {
        Ok(self.files.borrow().keys().cloned().collect())
    }

    fn read_file(&self, name: &str) -> Result<String> {
        self.files
            .borrow()
            .get(name)
            .cloned()
            .ok_or_else(|| GitBumpError::workspace(format!("No such file: {}", name)))
    }

    fn write_file(&self, name: &str, contents: &str) -> Result<()> {
        self.files
            .borrow_mut()
            .insert(name.to_string(), contents.to_string());
        Ok(())
    }
}
