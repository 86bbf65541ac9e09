use anyhow::Result;
use bump::{arguments::Arguments, rewrite::bump_file};
use clap::Parser;
use log::LevelFilter;

fn main() -> Result<()> {
    let args = Arguments::parse();
    pretty_env_logger::env_logger::builder()
        .filter_level(if args.verbose { LevelFilter::Debug } else { LevelFilter::Info })
        .format_timestamp(None)
        .init();

    // Validate the flags before touching the file
    let options = args.options()?;
    let report = bump_file(&args.filename, &options)?;

    if args.should_report() {
        println!("{report}");
    }

    Ok(())
}
