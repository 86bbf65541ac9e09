use std::path::PathBuf;
use thiserror::Error;

use crate::bumper::{Direction, Segment};

/// Everything that can stop a bump before (or while) the file is rewritten
#[derive(Debug, Error)]
pub enum BumpError {
    #[error("{} doesn't exist", .0.display())]
    FileNotFound(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line} doesn't exist (only {count} lines)")]
    LineOutOfRange { line: usize, count: usize },

    #[error("no SemVer pattern found {}", describe_scope(.line))]
    NoMatchFound { line: Option<usize> },

    #[error("occurrence {occurrence} doesn't exist (only {found} SemVer patterns found {})", describe_scope(.line))]
    OccurrenceOutOfRange {
        occurrence: usize,
        found: usize,
        line: Option<usize>,
    },

    #[error("'{0}' is not a valid SemVer segment (expected major, minor, or patch)")]
    InvalidSegmentName(String),

    #[error("'{value}' is not a valid {segment} number")]
    InvalidSegment { segment: Segment, value: String },

    #[error("cannot {direction} {segment} of {version}: value out of range")]
    SegmentOutOfRange {
        segment: Segment,
        direction: Direction,
        version: String,
    },

    #[error("failed to write {}: {source}", .path.display())]
    FileWriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid SemVer pattern: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, BumpError>;

fn describe_scope(line: &Option<usize>) -> String {
    match line {
        Some(line) => format!("on line {line}"),
        None => "in file".to_string(),
    }
}
