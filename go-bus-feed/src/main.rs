use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use go_bus_feed::Error;
use go_bus_feed::feed::load_feed;
use go_bus_feed::output::write_feed;
use go_bus_feed::pipeline::{ProcessConfig, ProcessContext, process_feed};
use go_bus_feed::variants::{VariantTable, go_transit};

/// Convert a GO Transit GTFS feed into stable IDs and canonical headsigns.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// GTFS feed: a .zip archive or an extracted directory
    input: PathBuf,

    /// Directory to write the JSON output into
    output: PathBuf,

    /// JSON variant table to use instead of the built-in one
    #[arg(long)]
    variants: Option<PathBuf>,

    /// Emit routes without a color instead of failing
    #[arg(long)]
    lenient_route_colors: bool,

    /// Keep the first headsign when a direction cannot be decided
    #[arg(long)]
    tolerate_ambiguous_directions: bool,

    /// Keep branch letters from route-code prefixes ("96B - X" becomes "B X")
    #[arg(long)]
    keep_branch_letter: bool,

    /// Number of days of service to keep
    #[arg(long, default_value_t = 30)]
    service_window_days: u32,

    /// First day of the service window (YYYY-MM-DD), default today
    #[arg(long)]
    service_window_start: Option<NaiveDate>,
}

impl Args {
    fn config(&self) -> ProcessConfig {
        ProcessConfig::new(
            self.lenient_route_colors,
            self.tolerate_ambiguous_directions,
            self.keep_branch_letter,
            self.service_window_days,
            self.service_window_start,
        )
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let table = match &args.variants {
        Some(path) => VariantTable::load(path)?,
        None => go_transit()?,
    };
    info!(routes = table.len(), "variant table loaded");

    let feed = load_feed(&args.input)?;
    let ctx = ProcessContext::for_feed(args.config(), table, &feed);
    let processed = process_feed(&feed, &ctx)?;
    write_feed(&args.output, &processed)?;
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
