use std::path::Path;

use git2::Repository as Git2Repo;

use crate::domain::Commit;
use crate::error::{GitBumpError, Result};

/// Wrapper around git2::Repository implementing the [super::Repository] trait
pub struct Git2Repository {
    repo: Git2Repo,
    remote: String,
}

impl Git2Repository {
    /// Open or discover a git repository at `path`, pushing to `remote`
    pub fn open<P: AsRef<Path>>(path: P, remote: impl Into<String>) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository {
            repo,
            remote: remote.into(),
        })
    }

    /// Create from an existing git2::Repository
    pub fn from_git2(repo: Git2Repo, remote: impl Into<String>) -> Self {
        Git2Repository {
            repo,
            remote: remote.into(),
        }
    }

    fn resolve_commit_oid(&self, refname: &str) -> Result<git2::Oid> {
        let object = self.repo.revparse_single(refname).map_err(|e| {
            GitBumpError::tag(format!("Cannot resolve revision '{}': {}", refname, e))
        })?;

        Ok(object.peel(git2::ObjectType::Commit)?.id())
    }

    fn push_refspec(&self, refspec: &str) -> Result<()> {
        let mut remote = self
            .repo
            .find_remote(&self.remote)
            .map_err(|e| GitBumpError::remote(format!("Cannot find remote: {}", e)))?;

        remote
            .push(&[refspec], None)
            .map_err(|e| GitBumpError::remote(format!("Push failed: {}", e)))?;

        Ok(())
    }
}

impl super::Repository for Git2Repository {
    fn list_tags(&self) -> Result<Vec<String>> {
        let tags = self.repo.tag_names(None)?;

        Ok(tags.iter().flatten().map(|s| s.to_string()).collect())
    }

    fn log_commits(&self, range_start: Option<&str>, range_end: &str) -> Result<Vec<Commit>> {
        let mut revwalk = self.repo.revwalk()?;

        revwalk.push(self.resolve_commit_oid(range_end)?)?;

        if let Some(start) = range_start {
            revwalk.hide(self.resolve_commit_oid(start)?)?;
        }

        let mut commits = Vec::new();

        for oid_result in revwalk {
            let oid = oid_result?;
            let commit = self.repo.find_commit(oid)?;

            let header = commit.summary().unwrap_or("(empty message)").to_string();
            let author = commit.author();

            commits.push(Commit::new(
                oid.to_string(),
                header,
                author.name().unwrap_or("unknown"),
                author.email().unwrap_or("unknown"),
            ));
        }

        Ok(commits)
    }

    fn commit_all(&self, message: &str) -> Result<()> {
        let mut index = self.repo.index()?;
        index.add_all(["*"], git2::IndexAddOption::DEFAULT, None)?;
        index.write()?;

        let tree_id = index.write_tree()?;
        let tree = self.repo.find_tree(tree_id)?;

        let signature = self.repo.signature()?;
        let parent = self.repo.head()?.peel_to_commit()?;

        self.repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            message,
            &tree,
            &[&parent],
        )?;

        Ok(())
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        let head = self
            .repo
            .head()?
            .peel(git2::ObjectType::Commit)
            .map_err(|e| GitBumpError::tag(format!("Cannot peel HEAD: {}", e)))?;

        self.repo
            .tag_lightweight(name, &head, false)
            .map_err(|e| GitBumpError::tag(format!("Cannot create tag '{}': {}", name, e)))?;

        Ok(())
    }

    fn push_branch(&self) -> Result<()> {
        let head = self.repo.head()?;

        if !head.is_branch() {
            return Err(GitBumpError::remote("HEAD is not on a branch"));
        }

        let refname = head
            .name()
            .ok_or_else(|| GitBumpError::remote("HEAD reference has a non-utf8 name"))?;

        self.push_refspec(&format!("{}:{}", refname, refname))
    }

    fn push_ref(&self, name: &str) -> Result<()> {
        self.push_refspec(&format!("refs/tags/{}:refs/tags/{}", name, name))
    }
}
