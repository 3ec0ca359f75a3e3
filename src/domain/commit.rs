use std::sync::OnceLock;

use regex::Regex;

use crate::domain::ChangeType;

/// Commit author identity from the git log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitAuthor {
    pub name: String,
    pub email: String,
}

/// Commit metadata as returned by the version-control log.
///
/// Read-only; ordering of a commit list is whatever the collaborator
/// returned and is never re-sorted here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub sha: String,
    pub message: String,
    pub author: CommitAuthor,
}

impl Commit {
    /// Create a new commit record
    pub fn new(
        sha: impl Into<String>,
        message: impl Into<String>,
        author_name: impl Into<String>,
        author_email: impl Into<String>,
    ) -> Self {
        Commit {
            sha: sha.into(),
            message: message.into(),
            author: CommitAuthor {
                name: author_name.into(),
                email: author_email.into(),
            },
        }
    }

    /// First line of the commit message
    pub fn header(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    /// Classify this commit by its header, if it carries a known prefix
    pub fn change_type(&self) -> Option<ChangeType> {
        classify_header(self.header())
    }
}

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        let tokens = ChangeType::ALL
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&format!(r"\b({})\b", tokens)).expect("change type alternation is valid")
    })
}

/// Classify a commit header against the known change types.
///
/// A candidate token is only accepted when it is followed by the grammar
/// `[ "(" scope ")" ] [ "!" ] ":"`. Tokens may appear anywhere in the first
/// line; the first well-formed occurrence wins. Returns `None` for
/// unclassified headers, which is not an error.
pub fn classify_header(header: &str) -> Option<ChangeType> {
    let line = header.lines().next().unwrap_or("");

    for candidate in token_pattern().find_iter(line) {
        if !has_well_formed_suffix(&line[candidate.end()..]) {
            continue;
        }

        if let Some(change) = ChangeType::from_token(candidate.as_str()) {
            return Some(change);
        }
    }

    None
}

/// Check for `[ "(" scope ")" ] [ "!" ] ":"` immediately after a type token
fn has_well_formed_suffix(rest: &str) -> bool {
    let rest = match rest.strip_prefix('(') {
        Some(after_open) => match after_open.find(')') {
            Some(close) => &after_open[close + 1..],
            // Unterminated scope, not a conventional prefix
            None => return false,
        },
        None => rest,
    };

    let rest = rest.strip_prefix('!').unwrap_or(rest);

    rest.starts_with(':')
}
