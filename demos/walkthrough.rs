//! Walks through the `civil_date` API on a pair of dates.
//!
//! ```text
//! cargo run --example walkthrough
//! cargo run --example walkthrough -- --day 28 --month 2 --year 2024 --add 2
//! ```

use civil_date::{Date, DateError};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(about = "Demonstrates calendar date validation and arithmetic")]
struct Args {
    /// Day of the first date
    #[arg(long, default_value_t = 30)]
    day: u8,

    /// Month of the first date
    #[arg(long, default_value_t = 4)]
    month: u8,

    /// Year of the first date
    #[arg(long, default_value_t = 2025)]
    year: u32,

    /// Days to add to the second date
    #[arg(long, default_value_t = 1)]
    add: u32,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        if e.is_range_error() {
            error!(error = %e, "Date could not be created");
        } else {
            error!(error = %e, "Date arithmetic failed");
        }
    }
}

fn run(args: &Args) -> Result<(), DateError> {
    let first = Date::new(args.day, args.month, args.year)?;
    info!(date = %first, "First date");
    info!(leap = first.is_leap_year(), "Leap year?");
    info!(ordinal = first.to_ordinal(), "Day of the year");

    let second = Date::new(21, 12, 2023)?;
    info!(date = %second, "Second date");

    info!(result = first == second, "first == second");
    info!(result = first > second, "first > second");
    info!(result = first < second, "first < second");

    let shifted = second.add_days(args.add)?;
    info!(date = %shifted, days = args.add, "Second date shifted");

    // April has 30 days, so this ends the walkthrough with an error
    Date::new(31, 4, 2025)?;
    Ok(())
}
