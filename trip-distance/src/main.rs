use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use trip_distance::distance::{DistanceCalculator, DistanceConfig, EARTH_RADIUS_ENV};
use trip_distance::domain::StopId;
use trip_distance::snapshot::load_trip;

#[derive(Parser, Debug)]
#[command(name = "trip-distance")]
#[command(about = "Distance travelled between two stops of a trip snapshot.", long_about = None)]
struct Cli {
    /// Path to the trip snapshot (.json)
    snapshot: PathBuf,

    /// Stop id the journey starts at
    origin: u64,

    /// Stop id the journey ends at
    destination: u64,

    /// Sphere radius in meters (default: WGS-84 equatorial radius)
    #[arg(long, env = EARTH_RADIUS_ENV)]
    earth_radius_m: Option<f64>,
}

impl Cli {
    fn config(&self) -> anyhow::Result<DistanceConfig> {
        let config = match self.earth_radius_m {
            Some(radius) => DistanceConfig::new(radius)?,
            None => DistanceConfig::default(),
        };
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = cli.config()?;
    info!(earth_radius_m = config.earth_radius_m(), "using sphere radius");

    let trip = load_trip(&cli.snapshot)?;
    let (origin, destination) = (StopId(cli.origin), StopId(cli.destination));
    let summary = DistanceCalculator::new(config)
        .summarize(&trip, origin, destination)
        .with_context(|| format!("measuring trip {} from {origin} to {destination}", trip.id))?;

    println!(
        "{} {} ({} → {})",
        trip.line_name,
        trip.id,
        trip.origin_name(),
        trip.destination_name()
    );
    println!("  stops:    {}", summary.stops);
    println!("  distance: {} ({:.3} km)", summary.distance, summary.distance.as_km());
    if let Some(duration) = summary.planned_duration {
        println!("  planned:  {} min", duration.num_minutes());
    }
    if let Some(speed) = summary.average_speed_kmh() {
        println!("  average:  {speed:.1} km/h");
    }

    Ok(())
}
