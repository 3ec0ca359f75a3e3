//! Console output helpers.
//!
//! Pure formatting/printing; nothing here affects the bump sequence.

use console::style;

use crate::analyzer::UnclassifiedCommit;
use crate::resolver::VersionResolution;

/// Print an error message to stderr
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Print a success message
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Print a status message
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Report commits that matched no known change-type prefix.
///
/// Informational only; these commits contribute nothing to the increment.
pub fn display_unclassified(commits: &[UnclassifiedCommit]) {
    for commit in commits {
        display_status(&format!("Ignoring commit: {} ({})", commit.header, commit.sha));
    }
}

/// Verbose summary of a resolution snapshot
pub fn display_resolution(resolution: &VersionResolution) {
    println!(
        "{} {} version tag(s) discovered",
        style("→").yellow(),
        resolution.versions.len()
    );

    match &resolution.version_file {
        Some(file) => display_status(&format!("version file: {}", file)),
        None => display_status("version file: none detected"),
    }

    display_status(&format!(
        "current {} -> next {} ({})",
        resolution.current_version, resolution.next_version, resolution.increment_type
    ));
}
