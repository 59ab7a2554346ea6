//! Classifies commit or pull request text into a version bump

use crate::config::KeywordsConfig;
use crate::domain::BumpKind;

const MERGE_COMMIT_PHRASE: &str = "merge pull request";

/// Decides which version component a piece of free text asks to bump.
///
/// Rules are evaluated in order and the first rule with a matching phrase wins.
/// Major rules always come before minor rules, so text that requests both gets
/// the more disruptive bump. Text that matches nothing is a patch bump.
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    rules: Vec<(BumpKind, Vec<String>)>,
}

impl IntentClassifier {
    /// Create a classifier from configured key phrases
    pub fn new(keywords: &KeywordsConfig) -> Self {
        IntentClassifier {
            rules: vec![
                (BumpKind::Major, normalize(&keywords.major)),
                (BumpKind::Minor, normalize(&keywords.minor)),
            ],
        }
    }

    /// Classify text; never fails and defaults to a patch bump
    pub fn classify(&self, text: &str) -> BumpKind {
        let text = text.to_lowercase();

        for (kind, phrases) in &self.rules {
            if let Some(phrase) = phrases.iter().find(|p| text.contains(p.as_str())) {
                tracing::debug!(%kind, phrase = %phrase, "matched bump key phrase");
                return *kind;
            }
        }

        BumpKind::Patch
    }
}

impl Default for IntentClassifier {
    fn default() -> Self {
        IntentClassifier::new(&KeywordsConfig::default())
    }
}

fn normalize(phrases: &[String]) -> Vec<String> {
    phrases
        .iter()
        .map(|p| p.trim().to_lowercase())
        .filter(|p| !p.is_empty())
        .collect()
}

/// Whether a commit message was produced by merging a pull request
pub fn is_merge_commit(message: &str) -> bool {
    message.to_lowercase().contains(MERGE_COMMIT_PHRASE)
}
