//! Human-readable status output.
//!
//! Machine-readable `key=value` output goes to stdout from `main`; everything
//! printed here is for people reading the CI log.

use console::style;

use crate::cli::BumpOutcome;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Print the commit being processed, indented like the CI action log.
pub fn display_commit(message: Option<&str>, sha: Option<&str>) {
    if let Some(message) = message {
        eprintln!("The commit message is:\n\t'{}'", message);
    }
    if let Some(sha) = sha {
        eprintln!("The commit SHA is:\n\t'{}'", sha);
    }
}

/// Describe a version change without styling, e.g. `2.3.1 -> 2.4.0 (minor)`.
pub fn format_version_change(outcome: &BumpOutcome) -> String {
    format!(
        "{} -> {} ({})",
        outcome.old_version, outcome.new_version, outcome.bumped
    )
}

/// Display the version change and whether the file was rewritten.
pub fn display_version_change(outcome: &BumpOutcome) {
    eprintln!("\n{}", style("Version Change:").bold());
    eprintln!("  From: {}", style(outcome.old_version).red());
    eprintln!("  To:   {}", style(outcome.new_version).green());

    if outcome.written {
        display_success(&format!(
            "Updated {}: {}",
            outcome.file.display(),
            format_version_change(outcome)
        ));
    } else {
        display_status(&format!(
            "Dry run, {} not modified: {}",
            outcome.file.display(),
            format_version_change(outcome)
        ));
    }
}
