mod analysis;
mod input;
mod report;

use analysis::run_analysis;
use anyhow::Result;
use clap::Parser;
use input::RosetteArgs;
use report::render_summary;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

fn main() -> Result<()> {
    let args = RosetteArgs::parse();
    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    // Three (angle, strain) pairs from a rosette bonded at one point.
    // See: https://en.wikipedia.org/wiki/Strain_gauge
    let reading = args.reading()?;

    // Solve the strain transformation equations, then build Mohr's circle.
    // A singular gauge layout stops here with the solver's error.
    let summary = run_analysis(&reading)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", render_summary(&summary));
    }

    Ok(())
}
