use std::fmt;

/// Conventional commit change types recognized in commit headers.
///
/// This set is fixed; commits with any other prefix (or no prefix at all)
/// are treated as unclassified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeType {
    Fix,
    Feat,
    Docs,
    Style,
    Refactor,
    Perf,
    Test,
    Build,
    Ci,
    Bump,
    Deps,
}

impl ChangeType {
    /// All recognized change types, in the order their tokens are matched.
    pub const ALL: [ChangeType; 11] = [
        ChangeType::Fix,
        ChangeType::Feat,
        ChangeType::Docs,
        ChangeType::Style,
        ChangeType::Refactor,
        ChangeType::Perf,
        ChangeType::Test,
        ChangeType::Build,
        ChangeType::Ci,
        ChangeType::Bump,
        ChangeType::Deps,
    ];

    /// The token as it appears in a commit header
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeType::Fix => "fix",
            ChangeType::Feat => "feat",
            ChangeType::Docs => "docs",
            ChangeType::Style => "style",
            ChangeType::Refactor => "refactor",
            ChangeType::Perf => "perf",
            ChangeType::Test => "test",
            ChangeType::Build => "build",
            ChangeType::Ci => "ci",
            ChangeType::Bump => "bump",
            ChangeType::Deps => "deps",
        }
    }

    /// Look up a change type from its header token
    pub fn from_token(token: &str) -> Option<ChangeType> {
        ChangeType::ALL.iter().copied().find(|c| c.as_str() == token)
    }

    /// Fixed mapping from change type to version increment.
    ///
    /// `bump` commits are produced by this tool itself and must not trigger
    /// another release.
    pub fn increment(&self) -> IncrementType {
        match self {
            ChangeType::Fix => IncrementType::Patch,
            ChangeType::Feat => IncrementType::Minor,
            ChangeType::Refactor => IncrementType::Patch,
            ChangeType::Deps => IncrementType::Patch,
            ChangeType::Docs
            | ChangeType::Style
            | ChangeType::Perf
            | ChangeType::Test
            | ChangeType::Build
            | ChangeType::Ci
            | ChangeType::Bump => IncrementType::None,
        }
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Version increment magnitude.
///
/// Variants are declared weakest-first so the derived ordering makes
/// `Major` the maximum; aggregation over a commit list is a plain `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IncrementType {
    None,
    Patch,
    Minor,
    Major,
}

impl IncrementType {
    /// Upper-case name, as printed by `--incrementation-type`
    pub fn name(&self) -> &'static str {
        match self {
            IncrementType::Major => "MAJOR",
            IncrementType::Minor => "MINOR",
            IncrementType::Patch => "PATCH",
            IncrementType::None => "NONE",
        }
    }
}

impl fmt::Display for IncrementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
