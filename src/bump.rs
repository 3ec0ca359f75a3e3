use crate::error::Result;
use crate::git::Repository;
use crate::resolver::VersionResolution;
use crate::ui;
use crate::workspace::Workspace;

/// Executes the side-effecting bump sequence for a resolved version.
///
/// Steps run strictly in order: version-file rewrite, commit, tag creation,
/// branch push, tag push. The first collaborator failure aborts the rest;
/// already-applied steps are not rolled back.
pub struct Bumper {
    dry_run: bool,
    verbose: bool,
}

impl Bumper {
    /// Create a bumper; `dry_run` reports steps instead of executing them
    pub fn new(dry_run: bool, verbose: bool) -> Self {
        Bumper { dry_run, verbose }
    }

    fn should_log(&self) -> bool {
        self.verbose || self.dry_run
    }

    /// Run the bump sequence for `resolution`
    pub fn run(
        &self,
        resolution: &VersionResolution,
        repo: &dyn Repository,
        workspace: &dyn Workspace,
    ) -> Result<()> {
        let current = resolution.current_version.to_string();
        let next = resolution.next_version.to_string();

        if let Some(file) = &resolution.version_file {
            if self.should_log() {
                ui::display_status(&format!("updating version file: {}", file));
            }
            if !self.dry_run {
                let contents = workspace.read_file(file)?;
                let updated = contents.replacen(&current, &next, 1);
                workspace.write_file(file, &updated)?;
            }

            if self.should_log() {
                ui::display_status("committing changes");
            }
            if !self.dry_run {
                repo.commit_all(&format!("bump: {} -> {}", current, next))?;
            }
        } else if self.should_log() {
            ui::display_status("skipping version file: none detected");
        }

        if self.should_log() {
            ui::display_status(&format!("creating new tag: {}", next));
        }
        if !self.dry_run {
            repo.create_tag(&next)?;
        }

        if self.should_log() {
            ui::display_status("pushing changes to origin");
        }
        if !self.dry_run {
            repo.push_branch()?;
        }

        if self.should_log() {
            ui::display_status(&format!("pushing tag {} to origin", next));
        }
        if !self.dry_run {
            repo.push_ref(&next)?;
        }

        Ok(())
    }
}
