//! Computes the next version and rewrites it into the version file

use std::fs;
use std::io::Write;
use std::ops::Range;
use std::path::Path;

use crate::domain::{BumpKind, Version};
use crate::error::{BumpError, Result};
use crate::locator::LocatedVersion;

/// Successor of `old` for the requested bump
pub fn next_version(old: Version, kind: BumpKind) -> Result<Version> {
    old.bump(kind)
}

/// Replace `span` in `content` with `replacement`, leaving every other byte as is
pub fn splice(content: &str, span: Range<usize>, replacement: &str) -> Result<String> {
    if span.start > span.end
        || span.end > content.len()
        || !content.is_char_boundary(span.start)
        || !content.is_char_boundary(span.end)
    {
        return Err(BumpError::parse(format!(
            "token range {}..{} is outside the file content",
            span.start, span.end
        )));
    }

    let mut out = String::with_capacity(content.len() - span.len() + replacement.len());
    out.push_str(&content[..span.start]);
    out.push_str(replacement);
    out.push_str(&content[span.end..]);
    Ok(out)
}

/// Bump the located version and write it back to `path`.
///
/// `content` must be the text `located` was found in. The new content goes to
/// a temporary file next to the target which is synced and then renamed over
/// it, so the target is either fully rewritten or left untouched.
pub fn write_version(
    path: &Path,
    content: &str,
    located: &LocatedVersion,
    kind: BumpKind,
) -> Result<Version> {
    let new_version = next_version(located.version, kind)?;
    let updated = splice(content, located.span.clone(), &new_version.to_string())?;

    replace_file(path, updated.as_bytes())?;

    tracing::info!(
        path = %path.display(),
        old = %located.version,
        new = %new_version,
        bumped = %kind,
        "rewrote version"
    );
    Ok(new_version)
}

fn replace_file(path: &Path, bytes: &[u8]) -> Result<()> {
    // Rename over the symlink target, not the link itself
    let target = fs::canonicalize(path).map_err(|e| BumpError::write(path, e.to_string()))?;
    let metadata = fs::metadata(&target).map_err(|e| BumpError::write(path, e.to_string()))?;
    if metadata.permissions().readonly() {
        return Err(BumpError::write(path, "file is read-only"));
    }

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = tempfile::Builder::new()
        .prefix(".cmake-bump")
        .tempfile_in(dir)
        .map_err(|e| BumpError::write(path, format!("cannot create temporary file: {}", e)))?;

    temp.write_all(bytes)
        .and_then(|_| temp.as_file().sync_all())
        .map_err(|e| BumpError::write(path, e.to_string()))?;

    fs::set_permissions(temp.path(), metadata.permissions())
        .map_err(|e| BumpError::write(path, e.to_string()))?;

    temp.persist(&target)
        .map_err(|e| BumpError::write(path, e.error.to_string()))?;
    Ok(())
}
