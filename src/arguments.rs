use clap::{ArgAction, Parser};
use std::num::NonZeroUsize;
use std::path::PathBuf;

use crate::bumper::{Direction, Segment};
use crate::error::Result;
use crate::rewrite::BumpOptions;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "SemVer bumping made easy.",
    bin_name = "bump",
    disable_version_flag = true
)]
pub struct Arguments {
    /// File containing the SemVer pattern to bump
    pub filename: PathBuf,
    /// SemVer segment to bump (major, minor, or patch)
    #[arg(long, short, default_value = "patch")]
    pub segment: String,
    /// Line number to look for the SemVer pattern on (0 searches the whole file)
    #[arg(long, short, default_value_t = 0)]
    pub line: usize,
    /// If multiple SemVer patterns are found, use this to indicate which one to bump
    #[arg(long, short, default_value_t = NonZeroUsize::MIN)]
    pub occurrence: NonZeroUsize,
    /// Print the change without writing the file
    #[arg(long, short)]
    pub dry_run: bool,
    /// Decrement the segment instead of incrementing it
    #[arg(long)]
    pub debump: bool,
    /// Suppress output
    #[arg(long, short)]
    pub quiet: bool,
    /// Enable debug logging
    #[arg(long)]
    pub verbose: bool,
    /// Print version
    #[arg(long, short = 'v', action = ArgAction::Version)]
    pub version: Option<bool>,
}

impl Arguments {
    /// Validates the raw flags into the options a bump runs with.
    pub fn options(&self) -> Result<BumpOptions> {
        Ok(BumpOptions {
            segment: self.segment.parse::<Segment>()?,
            direction: if self.debump {
                Direction::Decrement
            } else {
                Direction::Increment
            },
            line: NonZeroUsize::new(self.line),
            occurrence: self.occurrence,
            dry_run: self.dry_run,
        })
    }

    /// Dry runs always print their report.
    pub fn should_report(&self) -> bool {
        !self.quiet || self.dry_run
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BumpError;
    use clap::error::ErrorKind;

    #[test]
    fn test_default_values() {
        let args = Arguments::parse_from(["bump", "VERSION"]);
        assert_eq!(args.filename, PathBuf::from("VERSION"));
        assert_eq!(args.segment, "patch");
        assert_eq!(args.line, 0);
        assert_eq!(args.occurrence.get(), 1);
        assert!(!args.dry_run);
        assert!(!args.debump);
        assert!(!args.quiet);
        assert!(!args.verbose);
    }

    #[test]
    fn test_default_options() {
        let args = Arguments::parse_from(["bump", "VERSION"]);
        assert_eq!(args.options().unwrap(), BumpOptions::default());
    }

    #[test]
    fn test_filename_is_required() {
        let err = Arguments::try_parse_from(["bump"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_parse_short_flags() {
        let args =
            Arguments::parse_from(["bump", "-s", "minor", "-l", "3", "-o", "2", "-d", "-q", "f"]);
        let options = args.options().unwrap();
        assert_eq!(options.segment, Segment::Minor);
        assert_eq!(options.line, NonZeroUsize::new(3));
        assert_eq!(options.occurrence.get(), 2);
        assert!(options.dry_run);
        assert!(args.quiet);
    }

    #[test]
    fn test_parse_long_flags() {
        let args = Arguments::parse_from([
            "bump",
            "--segment",
            "MAJOR",
            "--line",
            "7",
            "--occurrence",
            "3",
            "--dry-run",
            "--debump",
            "--verbose",
            "Cargo.toml",
        ]);
        let options = args.options().unwrap();
        assert_eq!(options.segment, Segment::Major);
        assert_eq!(options.direction, Direction::Decrement);
        assert_eq!(options.line, NonZeroUsize::new(7));
        assert_eq!(options.occurrence.get(), 3);
        assert!(args.verbose);
    }

    #[test]
    fn test_line_zero_means_no_constraint() {
        let args = Arguments::parse_from(["bump", "-l", "0", "VERSION"]);
        assert_eq!(args.options().unwrap().line, None);
    }

    #[test]
    fn test_occurrence_zero_rejected() {
        assert!(Arguments::try_parse_from(["bump", "-o", "0", "VERSION"]).is_err());
    }

    #[test]
    fn test_invalid_segment_name() {
        let args = Arguments::parse_from(["bump", "-s", "minr", "VERSION"]);
        match args.options() {
            Err(BumpError::InvalidSegmentName(name)) => assert_eq!(name, "minr"),
            other => panic!("expected InvalidSegmentName, got {:?}", other),
        }
    }

    #[test]
    fn test_short_version_flag() {
        let err = Arguments::try_parse_from(["bump", "-v"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_short_help_flag() {
        let err = Arguments::try_parse_from(["bump", "-h"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_dry_run_reports_even_when_quiet() {
        let args = Arguments::parse_from(["bump", "-q", "VERSION"]);
        assert!(!args.should_report());

        let args = Arguments::parse_from(["bump", "-q", "-d", "VERSION"]);
        assert!(args.should_report());
    }
}
