//! Translates a bump outcome into CI action outputs

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::cli::BumpOutcome;
use crate::error::Result;

/// The values reported back to the invoking CI environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutputs {
    pub old_tag: String,
    pub new_tag: String,
    pub bumped: String,
}

impl ActionOutputs {
    pub fn from_outcome(outcome: &BumpOutcome, tag_prefix: &str) -> Self {
        ActionOutputs {
            old_tag: format!("{}{}", tag_prefix, outcome.old_version),
            new_tag: format!("{}{}", tag_prefix, outcome.new_version),
            bumped: outcome.bumped.to_string(),
        }
    }

    /// `key=value` pairs in output order
    pub fn pairs(&self) -> [(&'static str, &str); 3] {
        [
            ("old_tag", self.old_tag.as_str()),
            ("new_tag", self.new_tag.as_str()),
            ("bumped", self.bumped.as_str()),
        ]
    }

    /// Render as `key=value` lines
    pub fn render(&self) -> String {
        self.pairs()
            .iter()
            .map(|(key, value)| format!("{}={}\n", key, value))
            .collect()
    }

    /// Append the rendered lines to a `GITHUB_OUTPUT` style file
    pub fn append_to(&self, path: &Path) -> Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.write_all(self.render().as_bytes())?;
        file.flush()?;
        tracing::debug!(path = %path.display(), "wrote action outputs");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BumpKind, Version};
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn outcome() -> BumpOutcome {
        BumpOutcome {
            old_version: Version::new(2, 3, 1),
            new_version: Version::new(2, 4, 0),
            bumped: BumpKind::Minor,
            file: PathBuf::from("CMakeLists.txt"),
            written: true,
        }
    }

    #[test]
    fn test_render() {
        let outputs = ActionOutputs::from_outcome(&outcome(), "v");
        assert_eq!(outputs.render(), "old_tag=v2.3.1\nnew_tag=v2.4.0\nbumped=minor\n");
    }

    #[test]
    fn test_custom_prefix() {
        let outputs = ActionOutputs::from_outcome(&outcome(), "");
        assert_eq!(outputs.old_tag, "2.3.1");
        assert_eq!(outputs.new_tag, "2.4.0");
    }

    #[test]
    fn test_append_keeps_existing_lines() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"earlier=1\n").unwrap();
        file.flush().unwrap();

        ActionOutputs::from_outcome(&outcome(), "v")
            .append_to(file.path())
            .unwrap();

        let written = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(
            written,
            "earlier=1\nold_tag=v2.3.1\nnew_tag=v2.4.0\nbumped=minor\n"
        );
    }
}
