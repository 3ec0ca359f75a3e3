use crate::domain::{Commit, IncrementType};

/// A commit that matched no known change-type prefix.
///
/// Kept around so the caller can report it; contributing nothing to the
/// aggregated increment is intentional, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnclassifiedCommit {
    pub sha: String,
    pub header: String,
}

/// Result of aggregating a commit list into a single increment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncrementReport {
    pub increment: IncrementType,
    pub unclassified: Vec<UnclassifiedCommit>,
}

/// Reduce an ordered commit list to the strongest increment any commit implies.
///
/// Each commit is classified and mapped through the fixed change-type table;
/// the fold is a max over the increment strength order, so the result is
/// independent of commit order. An empty list aggregates to
/// [IncrementType::None].
pub fn aggregate(commits: &[Commit]) -> IncrementReport {
    let mut increment = IncrementType::None;
    let mut unclassified = Vec::new();

    for commit in commits {
        match commit.change_type() {
            Some(change) => increment = increment.max(change.increment()),
            None => unclassified.push(UnclassifiedCommit {
                sha: commit.sha.clone(),
                header: commit.header().to_string(),
            }),
        }
    }

    IncrementReport {
        increment,
        unclassified,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commit(sha: &str, message: &str) -> Commit {
        Commit::new(sha, message, "Test Author", "author@example.com")
    }

    #[test]
    fn test_empty_list_is_none() {
        let report = aggregate(&[]);
        assert_eq!(report.increment, IncrementType::None);
        assert!(report.unclassified.is_empty());
    }

    #[test]
    fn test_single_fix_is_patch() {
        let commits = vec![commit("a1", "fix: null check")];
        assert_eq!(aggregate(&commits).increment, IncrementType::Patch);
    }

    #[test]
    fn test_feat_beats_fix() {
        let commits = vec![
            commit("a1", "fix: null check"),
            commit("a2", "feat: new api"),
            commit("a3", "fix: another"),
        ];
        assert_eq!(aggregate(&commits).increment, IncrementType::Minor);
    }

    #[test]
    fn test_feat_alone_never_patch_or_major() {
        let commits = vec![
            commit("a1", "docs: readme"),
            commit("a2", "feat: search"),
            commit("a3", "ci: pipeline"),
        ];
        assert_eq!(aggregate(&commits).increment, IncrementType::Minor);
    }

    #[test]
    fn test_none_only_commits() {
        let commits = vec![
            commit("a1", "docs: update readme"),
            commit("a2", "style: format"),
            commit("a3", "test: add coverage"),
            commit("a4", "build: tweak profile"),
            commit("a5", "ci: cache deps"),
            commit("a6", "perf: faster loop"),
            commit("a7", "bump: 1.0.0 -> 1.0.1"),
        ];
        assert_eq!(aggregate(&commits).increment, IncrementType::None);
    }

    #[test]
    fn test_unclassified_contribute_none() {
        let commits = vec![
            commit("a1", "chore: typo"),
            commit("a2", "Merge branch 'main'"),
        ];
        let report = aggregate(&commits);
        assert_eq!(report.increment, IncrementType::None);
        assert_eq!(report.unclassified.len(), 2);
        assert_eq!(report.unclassified[0].sha, "a1");
        assert_eq!(report.unclassified[0].header, "chore: typo");
    }

    #[test]
    fn test_unclassified_mixed_with_classified() {
        let commits = vec![
            commit("a1", "feat: new api"),
            commit("a2", "chore: typo"),
        ];
        let report = aggregate(&commits);
        assert_eq!(report.increment, IncrementType::Minor);
        assert_eq!(report.unclassified.len(), 1);
        assert_eq!(report.unclassified[0].sha, "a2");
    }

    #[test]
    fn test_order_independence() {
        let a = commit("a1", "fix: one");
        let b = commit("a2", "feat: two");
        let c = commit("a3", "docs: three");
        let d = commit("a4", "not conventional");

        let baseline = aggregate(&[a.clone(), b.clone(), c.clone(), d.clone()]).increment;

        let permutations = [
            vec![a.clone(), b.clone(), d.clone(), c.clone()],
            vec![b.clone(), a.clone(), c.clone(), d.clone()],
            vec![c.clone(), d.clone(), b.clone(), a.clone()],
            vec![d.clone(), c.clone(), a.clone(), b.clone()],
            vec![d, b, c, a],
        ];

        for permuted in permutations {
            assert_eq!(aggregate(&permuted).increment, baseline);
        }
    }

    #[test]
    fn test_deps_and_refactor_are_patch() {
        let commits = vec![
            commit("a1", "deps: update serde"),
            commit("a2", "refactor: extract module"),
        ];
        assert_eq!(aggregate(&commits).increment, IncrementType::Patch);
    }
}
