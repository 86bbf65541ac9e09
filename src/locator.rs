use log::{debug, trace};
use regex::bytes::Regex;
use semver::Version;
use std::num::NonZeroUsize;

use crate::bumper;
use crate::error::{BumpError, Result};

/// A single SemVer pattern found in the file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionMatch {
    /// Byte offset of the match in the whole file, even when the search was limited to one line
    pub offset: usize,
    pub text: String,
    /// 1-based rank of the match within the search space
    pub occurrence: NonZeroUsize,
}

impl VersionMatch {
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn end(&self) -> usize {
        self.offset + self.len()
    }

    pub fn version(&self) -> Result<Version> {
        bumper::parse_version(&self.text)
    }
}

/// `\d` would also match non-ASCII digits, so the classes are spelled out.
pub fn semver_match_regex() -> Result<Regex> {
    Ok(Regex::new(r"[0-9]+\.[0-9]+\.[0-9]+")?)
}

/// Finds the `occurrence`-th SemVer pattern in `text`, optionally restricted to one 1-based line.
pub fn locate(
    text: &[u8],
    line: Option<NonZeroUsize>,
    occurrence: NonZeroUsize,
) -> Result<VersionMatch> {
    let (search_space, line_offset) = match line {
        Some(line) => line_search_space(text, line)?,
        None => (text, 0),
    };

    let regex = semver_match_regex()?;
    let matches: Vec<_> = regex.find_iter(search_space).collect();
    trace!("Found {} SemVer patterns in search space", matches.len());

    let line = line.map(NonZeroUsize::get);
    if matches.is_empty() {
        return Err(BumpError::NoMatchFound { line });
    }

    let Some(found) = matches.get(occurrence.get() - 1) else {
        return Err(BumpError::OccurrenceOutOfRange {
            occurrence: occurrence.get(),
            found: matches.len(),
            line,
        });
    };

    let located = VersionMatch {
        offset: line_offset + found.start(),
        text: String::from_utf8_lossy(found.as_bytes()).into_owned(),
        occurrence,
    };
    debug!(
        "Selected occurrence {} '{}' at byte {}",
        located.occurrence, located.text, located.offset
    );
    Ok(located)
}

/// Returns the requested line (without its `\n`) and the byte offset where it starts.
fn line_search_space(text: &[u8], line: NonZeroUsize) -> Result<(&[u8], usize)> {
    let index = line.get() - 1;
    let mut offset = 0;
    let mut count = 0;

    for (i, current) in text.split(|b| *b == b'\n').enumerate() {
        if i == index {
            return Ok((current, offset));
        }
        offset += current.len() + 1;
        count += 1;
    }

    Err(BumpError::LineOutOfRange {
        line: line.get(),
        count,
    })
}
