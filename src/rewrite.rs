use log::debug;
use semver::Version;
use std::fmt;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use crate::bumper::{self, Direction, Segment};
use crate::error::{BumpError, Result};
use crate::locator::{self, VersionMatch};

/// Everything a single bump needs, built once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpOptions {
    pub segment: Segment,
    pub direction: Direction,
    pub line: Option<NonZeroUsize>,
    pub occurrence: NonZeroUsize,
    pub dry_run: bool,
}

impl Default for BumpOptions {
    fn default() -> Self {
        BumpOptions {
            segment: Segment::Patch,
            direction: Direction::Increment,
            line: None,
            occurrence: NonZeroUsize::MIN,
            dry_run: false,
        }
    }
}

/// Result of bumping an in-memory buffer
#[derive(Debug, Clone)]
pub struct Bumped {
    pub found: VersionMatch,
    pub version: Version,
    pub contents: Vec<u8>,
}

/// What happened to a file, printable as `<file>: <old> -> <new>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub path: PathBuf,
    pub old: String,
    pub new: String,
    pub dry_run: bool,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} -> {}", self.path.display(), self.old, self.new)?;
        if self.dry_run {
            f.write_str(" (dry run)")?;
        }
        Ok(())
    }
}

/// Replaces exactly the matched span, leaving every other byte untouched.
pub fn splice(text: &[u8], found: &VersionMatch, replacement: &str) -> Vec<u8> {
    let mut contents = Vec::with_capacity(text.len() - found.len() + replacement.len());
    contents.extend_from_slice(&text[..found.offset]);
    contents.extend_from_slice(replacement.as_bytes());
    contents.extend_from_slice(&text[found.end()..]);
    contents
}

pub fn bump_text(text: &[u8], options: &BumpOptions) -> Result<Bumped> {
    let found = locator::locate(text, options.line, options.occurrence)?;
    let version = bumper::bump(&found.version()?, options.segment, options.direction)?;
    let contents = splice(text, &found, &version.to_string());
    Ok(Bumped {
        found,
        version,
        contents,
    })
}

/// Bumps the selected SemVer pattern of `path`, writing the file back unless `dry_run` is set.
pub fn bump_file(path: impl AsRef<Path>, options: &BumpOptions) -> Result<Report> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(BumpError::FileNotFound(path.to_path_buf()));
    }

    debug!("Reading file: '{}'", path.display());
    let text = std::fs::read(path).map_err(|source| BumpError::FileUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let bumped = bump_text(&text, options)?;
    let report = Report {
        path: path.to_path_buf(),
        old: bumped.found.text,
        new: bumped.version.to_string(),
        dry_run: options.dry_run,
    };

    if options.dry_run {
        debug!("Dry run, leaving '{}' untouched", path.display());
        return Ok(report);
    }

    std::fs::write(path, &bumped.contents).map_err(|source| BumpError::FileWriteFailure {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Wrote {} bytes to '{}'", bumped.contents.len(), path.display());
    Ok(report)
}
