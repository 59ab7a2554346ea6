//! Finds the version declaration in a build file and parses its token

use regex::Regex;
use std::fs;
use std::ops::Range;
use std::path::Path;

use crate::config::LocatorConfig;
use crate::domain::Version;
use crate::error::{BumpError, Result};

/// `project(<name> ... VERSION x.y.z ...)`, the canonical CMake declaration
const PROJECT_PATTERN: &str = r"(?is)\bproject\s*\([^)]*?\bVERSION\s+(?P<version>\d+\.\d+\.\d+)";

/// An identifier ending in `version` that opens a line or a call's argument
/// list, assigned a triplet: `set(VERSION 1.2.3)`, `PROJECT_VERSION 1.2.3`,
/// `version = "1.2.3"`
const ASSIGNMENT_PATTERN: &str =
    r#"(?im)(?:^[ \t]*|\(\s*)[A-Za-z0-9_]*version[\s=:"'(]*(?P<version>\d+\.\d+\.\d+)"#;

/// Text that never holds the project version: line comments, and statements
/// whose VERSION argument names a CMake release
const IGNORED_PATTERN: &str =
    r"(?is)#[^\n]*|\b(?:cmake_minimum_required|cmake_policy)\s*\([^)]*\)";

/// A version token found in a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedVersion {
    pub version: Version,
    /// Byte range of the token within the file content
    pub span: Range<usize>,
}

/// Locates the authoritative version declaration.
///
/// Patterns are tried in priority order; the first match of the first pattern
/// that matches at all is authoritative, even if its token then fails to parse.
#[derive(Debug, Clone)]
pub struct VersionLocator {
    patterns: Vec<Regex>,
    ignored: Regex,
}

impl VersionLocator {
    /// Build a locator with the built-in patterns followed by configured ones
    pub fn new(config: &LocatorConfig) -> Result<Self> {
        let mut patterns = vec![compile(PROJECT_PATTERN)?, compile(ASSIGNMENT_PATTERN)?];

        for pattern in &config.patterns {
            let regex = compile(pattern)?;
            if !regex.capture_names().any(|name| name == Some("version")) {
                return Err(BumpError::config(format!(
                    "locator pattern '{}' has no named group 'version'",
                    pattern
                )));
            }
            patterns.push(regex);
        }

        Ok(VersionLocator {
            patterns,
            ignored: compile(IGNORED_PATTERN)?,
        })
    }

    /// Read `path` and locate its version token, returning the content as well
    pub fn locate(&self, path: &Path) -> Result<(String, LocatedVersion)> {
        let content = fs::read_to_string(path).map_err(|e| {
            BumpError::not_found(format!("cannot read {}: {}", path.display(), e))
        })?;

        let located = self.locate_in(&content).map_err(|e| match e {
            BumpError::NotFound(_) => BumpError::not_found(path.display().to_string()),
            other => other,
        })?;

        tracing::info!(
            path = %path.display(),
            version = %located.version,
            offset = located.span.start,
            "located version declaration"
        );
        Ok((content, located))
    }

    /// Locate the version token in already loaded content
    pub fn locate_in(&self, content: &str) -> Result<LocatedVersion> {
        let ignored: Vec<Range<usize>> = self
            .ignored
            .find_iter(content)
            .map(|m| m.range())
            .collect();

        for pattern in &self.patterns {
            let token = pattern
                .captures_iter(content)
                .filter(|caps| {
                    caps.get(0)
                        .map_or(false, |m| !ignored.iter().any(|r| r.contains(&m.start())))
                })
                .filter_map(|caps| caps.name("version"))
                .find(|m| {
                    !ignored.iter().any(|r| r.contains(&m.start()))
                        && !continues_as_number(content, m.end())
                });

            if let Some(token) = token {
                tracing::debug!(pattern = pattern.as_str(), token = token.as_str(), "candidate token");
                let version = Version::parse(token.as_str())?;
                return Ok(LocatedVersion {
                    version,
                    span: token.range(),
                });
            }
        }

        Err(BumpError::not_found("no version-shaped token found"))
    }
}

/// Whether the text at `end` extends a matched triplet, as in `1.2.3.4`
fn continues_as_number(content: &str, end: usize) -> bool {
    let mut rest = content[end..].chars();
    matches!(
        (rest.next(), rest.next()),
        (Some('.'), Some(c)) if c.is_ascii_digit()
    )
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern)
        .map_err(|e| BumpError::config(format!("invalid locator pattern '{}': {}", pattern, e)))
}
