use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;
use semver::Version;

use crate::analyzer::{self, UnclassifiedCommit};
use crate::domain::{apply_increment, IncrementType};
use crate::error::{GitBumpError, Result};
use crate::git::Repository;
use crate::workspace::Workspace;

/// Snapshot of the version state for one run.
///
/// Built once from live repository state and never refreshed; the bump
/// orchestrator's side effects are not fed back into it.
#[derive(Debug, Clone)]
pub struct VersionResolution {
    /// All versions discovered from tags, sorted ascending by semver order
    pub versions: Vec<Version>,
    pub current_version: Version,
    pub next_version: Version,
    pub increment_type: IncrementType,
    /// Detected version file name, if any
    pub version_file: Option<String>,
    /// Commits that matched no known change-type prefix, for reporting
    pub unclassified: Vec<UnclassifiedCommit>,
}

/// Resolve the current and next version from tags, commit history and an
/// optionally detected version file.
///
/// The highest semver-valid tag is authoritative; the version file is only a
/// fallback when no tag parses. A repository with neither is an error, not a
/// 0.0.0 default. When the current version is tagged, only commits after
/// that tag count toward the increment; otherwise the full history does.
pub fn resolve(
    repo: &dyn Repository,
    workspace: &dyn Workspace,
    version_files: &[String],
) -> Result<VersionResolution> {
    let mut versions: Vec<Version> = repo
        .list_tags()?
        .iter()
        .filter_map(|tag| Version::parse(tag).ok())
        .collect();
    versions.sort();

    // Detected regardless of tags: the orchestrator rewrites it either way
    let version_file = detect_version_file(workspace, version_files)?;

    let current_version = match versions.last() {
        Some(version) => version.clone(),
        None => match &version_file {
            Some(name) => version_from_file(workspace, name)?,
            None => {
                return Err(GitBumpError::resolution(
                    "no semver tag and no version file found",
                ))
            }
        },
    };

    // A file-derived version that coincides with an existing tag counts as
    // tagged, so history is still cut at that tag.
    let is_current_version_tagged = versions.contains(&current_version);

    let commits = if is_current_version_tagged {
        repo.log_commits(Some(&current_version.to_string()), "HEAD")?
    } else {
        repo.log_commits(None, "HEAD")?
    };

    let report = analyzer::aggregate(&commits);
    let next_version = apply_increment(&current_version, report.increment);

    Ok(VersionResolution {
        versions,
        current_version,
        next_version,
        increment_type: report.increment,
        version_file,
        unclassified: report.unclassified,
    })
}

/// Find the first known version-file name present in the workspace root.
///
/// The known-filenames list decides priority; directory iteration order
/// never does.
fn detect_version_file(
    workspace: &dyn Workspace,
    version_files: &[String],
) -> Result<Option<String>> {
    let entries: HashSet<String> = workspace.list_entries()?.into_iter().collect();

    Ok(version_files
        .iter()
        .find(|name| entries.contains(*name))
        .cloned())
}

fn version_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"version.*?(\d+\.\d+\.\d+)").expect("version pattern is valid")
    })
}

/// Extract the embedded version from a version file's contents.
///
/// Matches the first `version ... X.Y.Z` occurrence; a file without the
/// keyword or a well-formed triple is an error naming that file.
fn version_from_file(workspace: &dyn Workspace, name: &str) -> Result<Version> {
    let contents = workspace.read_file(name)?;

    let captures = version_pattern().captures(&contents).ok_or_else(|| {
        GitBumpError::version_file(format!("Failed to find a version in: {}", name))
    })?;

    let triple = captures
        .get(1)
        .map(|m| m.as_str())
        .ok_or_else(|| GitBumpError::version_file(format!("Failed to find a version in: {}", name)))?;

    Ok(Version::parse(triple)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workspace::MockWorkspace;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_detect_first_match_by_list_order() {
        let mut workspace = MockWorkspace::new();
        // BTreeMap listing order is alphabetical: package.json before version.ts
        workspace.add_file("package.json", "{}");
        workspace.add_file("version.ts", "");

        let detected = detect_version_file(
            &workspace,
            &names(&["version.ts", "package.json", "pom.xml"]),
        )
        .unwrap();

        assert_eq!(detected, Some("version.ts".to_string()));
    }

    #[test]
    fn test_detect_none() {
        let workspace = MockWorkspace::new();
        let detected =
            detect_version_file(&workspace, &names(&["version.ts", "package.json"])).unwrap();
        assert_eq!(detected, None);
    }

    #[test]
    fn test_version_from_json_file() {
        let mut workspace = MockWorkspace::new();
        workspace.add_file("package.json", "{\n  \"version\": \"0.3.0\"\n}");

        let version = version_from_file(&workspace, "package.json").unwrap();
        assert_eq!(version, Version::new(0, 3, 0));
    }

    #[test]
    fn test_version_from_ts_file() {
        let mut workspace = MockWorkspace::new();
        workspace.add_file("version.ts", "export const version = \"1.4.2\";\n");

        let version = version_from_file(&workspace, "version.ts").unwrap();
        assert_eq!(version, Version::new(1, 4, 2));
    }

    #[test]
    fn test_version_from_xml_file() {
        let mut workspace = MockWorkspace::new();
        workspace.add_file("pom.xml", "<project><version>2.0.1</version></project>");

        let version = version_from_file(&workspace, "pom.xml").unwrap();
        assert_eq!(version, Version::new(2, 0, 1));
    }

    #[test]
    fn test_version_file_without_keyword() {
        let mut workspace = MockWorkspace::new();
        workspace.add_file("package.json", "{\"name\": \"demo\"}");

        let err = version_from_file(&workspace, "package.json").unwrap_err();
        assert!(err.to_string().contains("package.json"));
    }

    #[test]
    fn test_version_file_without_triple() {
        let mut workspace = MockWorkspace::new();
        workspace.add_file("package.json", "{\"version\": \"next\"}");

        let err = version_from_file(&workspace, "package.json").unwrap_err();
        assert!(err.to_string().contains("package.json"));
    }
}
