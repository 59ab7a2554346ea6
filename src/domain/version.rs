use crate::error::{BumpError, Result};
use std::fmt;
use std::str::FromStr;

/// Semantic version representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a `major.minor.patch` token (e.g., "1.2.3" or "v1.2.3")
    pub fn parse(token: &str) -> Result<Self> {
        let trimmed = token.trim();
        let clean = trimmed
            .strip_prefix(|c: char| c == 'v' || c == 'V')
            .unwrap_or(trimmed);

        let parts: Vec<&str> = clean.split('.').collect();
        if parts.len() != 3 {
            return Err(BumpError::parse(format!(
                "Invalid version format: '{}' - expected X.Y.Z",
                token
            )));
        }

        let major = parse_component(parts[0], "major", token)?;
        let minor = parse_component(parts[1], "minor", token)?;
        let patch = parse_component(parts[2], "patch", token)?;

        Ok(Version {
            major,
            minor,
            patch,
        })
    }

    /// Successor version for the given bump; lower components reset to 0
    pub fn bump(&self, kind: BumpKind) -> Result<Self> {
        let next = match kind {
            BumpKind::Major => self.major.checked_add(1).map(|major| Version {
                major,
                minor: 0,
                patch: 0,
            }),
            BumpKind::Minor => self.minor.checked_add(1).map(|minor| Version {
                major: self.major,
                minor,
                patch: 0,
            }),
            BumpKind::Patch => self.patch.checked_add(1).map(|patch| Version {
                major: self.major,
                minor: self.minor,
                patch,
            }),
        };

        next.ok_or_else(|| {
            BumpError::parse(format!(
                "cannot apply a {} bump to {}: component out of range",
                kind, self
            ))
        })
    }
}

fn parse_component(part: &str, name: &str, token: &str) -> Result<u64> {
    // u64::from_str accepts a leading '+', which is not a version digit
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BumpError::parse(format!(
            "Invalid {} version '{}' in '{}'",
            name, part, token
        )));
    }
    part.parse::<u64>().map_err(|_| {
        BumpError::parse(format!(
            "{} version '{}' in '{}' is out of range",
            name, part, token
        ))
    })
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = BumpError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

/// Which version component a run increments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BumpKind {
    Major,
    Minor,
    Patch,
}

impl BumpKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BumpKind::Major => "major",
            BumpKind::Minor => "minor",
            BumpKind::Patch => "patch",
        }
    }
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BumpKind {
    type Err = BumpError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "major" => Ok(BumpKind::Major),
            "minor" => Ok(BumpKind::Minor),
            "patch" => Ok(BumpKind::Patch),
            other => Err(BumpError::parse(format!(
                "Unknown bump kind '{}' - expected major, minor or patch",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parse() {
        let v = Version::parse("1.2.3").unwrap();
        assert_eq!(v.major, 1);
        assert_eq!(v.minor, 2);
        assert_eq!(v.patch, 3);
    }

    #[test]
    fn test_version_parse_with_prefix() {
        assert_eq!(Version::parse("v1.2.3").unwrap(), Version::new(1, 2, 3));
        assert_eq!(Version::parse("V0.1.0").unwrap(), Version::new(0, 1, 0));
    }

    #[test]
    fn test_version_parse_leading_zeros() {
        assert_eq!(Version::parse("1.02.3").unwrap(), Version::new(1, 2, 3));
    }

    #[test]
    fn test_version_parse_invalid() {
        assert!(Version::parse("1.2").is_err());
        assert!(Version::parse("vv1.2.3").is_err());
        assert!(Version::parse("vV1.2.3").is_err());
        assert!(Version::parse("1.2.3.4").is_err());
        assert!(Version::parse("1..3").is_err());
        assert!(Version::parse("1.+2.3").is_err());
        assert!(Version::parse("a.b.c").is_err());
        assert!(Version::parse("").is_err());
    }

    #[test]
    fn test_version_parse_overflow() {
        let err = Version::parse("1.2.99999999999999999999999").unwrap_err();
        assert!(matches!(err, BumpError::Parse(_)));
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_version_bump_major() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.bump(BumpKind::Major).unwrap(), Version::new(2, 0, 0));
    }

    #[test]
    fn test_version_bump_minor() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.bump(BumpKind::Minor).unwrap(), Version::new(1, 3, 0));
    }

    #[test]
    fn test_version_bump_patch() {
        let v = Version::new(0, 9, 9);
        assert_eq!(v.bump(BumpKind::Patch).unwrap(), Version::new(0, 9, 10));
    }

    #[test]
    fn test_bump_does_not_mutate_original() {
        let v = Version::new(2, 3, 1);
        let _ = v.bump(BumpKind::Minor);
        assert_eq!(v, Version::new(2, 3, 1));
    }

    #[test]
    fn test_version_bump_at_component_limit() {
        let v = Version::parse("18446744073709551615.0.0").unwrap();
        let err = v.bump(BumpKind::Major).unwrap_err();
        assert!(matches!(err, BumpError::Parse(_)));
        assert!(err.to_string().contains("out of range"));

        // Lower components may sit at the limit when they are reset
        let v = Version::new(1, u64::MAX, u64::MAX);
        assert_eq!(v.bump(BumpKind::Major).unwrap(), Version::new(2, 0, 0));
        assert!(v.bump(BumpKind::Minor).is_err());
        assert!(v.bump(BumpKind::Patch).is_err());
    }

    #[test]
    fn test_version_display() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.to_string(), "1.2.3");
    }

    #[test]
    fn test_bump_kind_from_str() {
        assert_eq!("MAJOR".parse::<BumpKind>().unwrap(), BumpKind::Major);
        assert_eq!(" minor ".parse::<BumpKind>().unwrap(), BumpKind::Minor);
        assert_eq!("patch".parse::<BumpKind>().unwrap(), BumpKind::Patch);
        assert!("prerelease".parse::<BumpKind>().is_err());
    }

    #[test]
    fn test_bump_kind_display() {
        assert_eq!(BumpKind::Major.to_string(), "major");
        assert_eq!(BumpKind::Minor.as_str(), "minor");
    }
}
