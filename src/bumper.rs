use log::debug;
use semver::Version;
use std::fmt;
use std::str::FromStr;

use crate::error::{BumpError, Result};

/// One of the three dot-separated numbers of a SemVer pattern
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Segment {
    Major,
    Minor,
    #[default]
    Patch,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Increment,
    Decrement,
}

impl FromStr for Segment {
    type Err = BumpError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "major" => Ok(Segment::Major),
            "minor" => Ok(Segment::Minor),
            "patch" => Ok(Segment::Patch),
            _ => Err(BumpError::InvalidSegmentName(s.to_string())),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Segment::Major => "major",
            Segment::Minor => "minor",
            Segment::Patch => "patch",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Increment => f.write_str("increment"),
            Direction::Decrement => f.write_str("decrement"),
        }
    }
}

/// Parses the `major.minor.patch` text of a match.
///
/// `semver::Version::parse` rejects leading zeros, which are legal in a matched
/// pattern (`01.2.3`), so each segment is parsed on its own.
pub fn parse_version(text: &str) -> Result<Version> {
    let mut segments = text.split('.');
    let mut next = |segment: Segment| -> Result<u64> {
        let value = segments.next().unwrap_or_default();
        value.parse::<u64>().map_err(|_| BumpError::InvalidSegment {
            segment,
            value: value.to_string(),
        })
    };

    let major = next(Segment::Major)?;
    let minor = next(Segment::Minor)?;
    let patch = next(Segment::Patch)?;
    Ok(Version::new(major, minor, patch))
}

/// Computes the bumped version.
///
/// Incrementing resets every lower segment to zero (`1.2.3` major -> `2.0.0`).
/// Decrementing only touches the selected segment, so it does not undo a
/// cascading increment.
pub fn bump(version: &Version, segment: Segment, direction: Direction) -> Result<Version> {
    let current = match segment {
        Segment::Major => version.major,
        Segment::Minor => version.minor,
        Segment::Patch => version.patch,
    };
    let value = match direction {
        Direction::Increment => current.checked_add(1),
        Direction::Decrement => current.checked_sub(1),
    }
    .ok_or_else(|| BumpError::SegmentOutOfRange {
        segment,
        direction,
        version: version.to_string(),
    })?;

    let mut bumped = Version::new(version.major, version.minor, version.patch);
    match (segment, direction) {
        (Segment::Major, Direction::Increment) => {
            bumped.major = value;
            bumped.minor = 0;
            bumped.patch = 0;
        }
        (Segment::Minor, Direction::Increment) => {
            bumped.minor = value;
            bumped.patch = 0;
        }
        (Segment::Major, Direction::Decrement) => bumped.major = value,
        (Segment::Minor, Direction::Decrement) => bumped.minor = value,
        (Segment::Patch, _) => bumped.patch = value,
    }

    debug!("Bumping {} ({} {}) -> {}", version, direction, segment, bumped);
    Ok(bumped)
}
