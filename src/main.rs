use clap::Parser;
use magvar::api::formatting::to_json;
use magvar::{
    ConfigurationManager, NavigationReport, NavigationTracker, NavigatorConfig, ScriptedFeed,
    TargetPosition, TextFormatter,
};
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Replay recorded sensor events and report variation, range, bearing and course.
#[derive(Debug, Parser)]
#[command(name = "magvar", version)]
struct Cli {
    /// JSON array of sensor events to replay
    #[arg(long)]
    samples: PathBuf,
    /// Target latitude in decimal degrees
    #[arg(long, requires = "target_lon", allow_negative_numbers = true)]
    target_lat: Option<f64>,
    /// Target longitude in decimal degrees
    #[arg(long, requires = "target_lat", allow_negative_numbers = true)]
    target_lon: Option<f64>,
    /// Navigator configuration file (JSON, see demos/config.json)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Emit the report as JSON
    #[arg(long)]
    json: bool,
    /// Single-line text output
    #[arg(long)]
    compact: bool,
    /// Decimal places in text output
    #[arg(long, default_value_t = 2)]
    decimals: usize,
    /// Enable tracing output
    #[arg(long)]
    trace: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut filter = EnvFilter::from_default_env();
    if cli.trace {
        filter = filter.add_directive("magvar=debug".parse()?);
    }
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    let config = match &cli.config {
        Some(path) => ConfigurationManager::from_file(path)?.get_config().clone(),
        None => NavigatorConfig::default(),
    };

    let samples = fs::read_to_string(&cli.samples)?;
    let mut feed = ScriptedFeed::from_json(&samples)?;

    let mut tracker = NavigationTracker::new(&config);
    let consumed = tracker.run(&mut feed)?;
    info!(consumed, "replay finished");

    let navigation = match (cli.target_lat, cli.target_lon) {
        (Some(latitude), Some(longitude)) => {
            Some(tracker.range_bearing_course_to(&TargetPosition::new(latitude, longitude))?)
        }
        _ => None,
    };

    let report = NavigationReport {
        display: tracker.snapshot(),
        position: tracker.position().copied(),
        navigation,
    };

    if cli.json {
        println!("{}", to_json(&report)?);
    } else {
        let mut formatter = TextFormatter::new(cli.decimals);
        if cli.compact {
            formatter = formatter.compact();
        }
        println!("{}", formatter.format_report(&report));
    }

    Ok(())
}
