//! Main bump workflow orchestration logic
//!
//! Ties the classifier, locator and writer together. The binary only parses
//! arguments and reports results; everything else happens here so the
//! workflow can be called programmatically without depending on clap.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::classifier::{is_merge_commit, IntentClassifier};
use crate::config::Config;
use crate::domain::{BumpKind, Version};
use crate::locator::VersionLocator;
use crate::writer;

/// Arguments for the bump workflow
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BumpWorkflowArgs {
    /// Commit message of the triggering push
    pub commit_message: Option<String>,

    /// Commit SHA of the triggering push, reported only
    pub commit_sha: Option<String>,

    /// Pull request description, used instead of a merge commit's message
    pub description: Option<String>,

    /// Version file overriding the configured one
    pub file: Option<PathBuf>,

    /// Bump to apply regardless of the text
    pub forced_bump: Option<BumpKind>,

    /// Compute the new version without touching the file
    pub dry_run: bool,
}

/// Result of a successful bump workflow
#[derive(Debug, Clone, PartialEq)]
pub struct BumpOutcome {
    pub old_version: Version,
    pub new_version: Version,
    pub bumped: BumpKind,

    /// The file that holds the version
    pub file: PathBuf,

    /// Whether the file was rewritten (false on dry runs)
    pub written: bool,
}

/// Chooses the text whose key phrases decide the bump.
///
/// A merge commit's message is generated by the forge, so the pull request
/// description is classified instead when one is available.
pub fn select_intent_text(args: &BumpWorkflowArgs) -> &str {
    let message = args.commit_message.as_deref().unwrap_or("");

    if is_merge_commit(message) {
        match args.description.as_deref() {
            Some(description) => {
                tracing::info!("merge commit detected, classifying pull request description");
                return description;
            }
            None => tracing::warn!(
                "merge commit detected but no pull request description supplied, using commit message"
            ),
        }
    }

    message
}

/// Main bump workflow
///
/// 1. Select the text to classify
/// 2. Classify it (unless a bump was forced)
/// 3. Locate and parse the current version
/// 4. Compute and write the new version (unless dry run)
pub fn run_bump_workflow(args: &BumpWorkflowArgs, config: &Config) -> Result<BumpOutcome> {
    if let Some(sha) = &args.commit_sha {
        tracing::info!(sha = %sha, "processing commit");
    }

    let bumped = match args.forced_bump {
        Some(kind) => {
            tracing::info!(%kind, "bump forced from command line");
            kind
        }
        None => IntentClassifier::new(&config.keywords).classify(select_intent_text(args)),
    };

    let file = args.file.clone().unwrap_or_else(|| config.file.clone());
    let locator = VersionLocator::new(&config.locator)?;
    let (content, located) = locator.locate(&file)?;

    let (new_version, written) = if args.dry_run {
        tracing::info!("dry run, leaving {} untouched", file.display());
        (writer::next_version(located.version, bumped)?, false)
    } else {
        let new_version = writer::write_version(&file, &content, &located, bumped)
            .with_context(|| format!("Failed to update version in {}", file.display()))?;
        (new_version, true)
    };

    Ok(BumpOutcome {
        old_version: located.version,
        new_version,
        bumped,
        file,
        written,
    })
}
