//! Generates a backend configuration file of vehicles, stops, and tasks.
//!
//! Stops are scattered in a circle given by its center and radius (in degrees
//! lat/lng); tasks are scattered in a smaller circle around their stop. The
//! document is printed to stdout:
//! ```
//! cargo run -p fleet-gen --bin generate -- --num-vehicles 2 > backend_config.json
//! ```

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fleet_gen::config::{DEFAULT_TIMEZONE, GeneratorConfig};
use fleet_gen::models::TaskType;
use fleet_gen::output::write_pretty_json;
use fleet_gen::sampling::Circle;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The number of vehicles to generate.
    #[arg(short = 'v', long, visible_alias = "numVehicles", default_value_t = 3, allow_negative_numbers = true)]
    num_vehicles: i64,

    /// The number of stops to generate, per vehicle.
    #[arg(short = 's', long = "num-stops-per-vehicle", visible_alias = "numStopsPerVehicle", default_value_t = 5, allow_negative_numbers = true)]
    num_stops: i64,

    /// The number of tasks to generate, per stop.
    #[arg(short = 't', long = "num-tasks-per-stop", visible_alias = "numTasksPerStop", default_value_t = 3, allow_negative_numbers = true)]
    num_tasks: i64,

    /// The latitude of the circle's center.
    #[arg(long = "epi-lat", visible_alias = "epiLat", default_value_t = 37.8, allow_negative_numbers = true)]
    lat: f64,

    /// The longitude of the circle's center.
    #[arg(long = "epi-lng", visible_alias = "epiLng", default_value_t = -122.4, allow_negative_numbers = true)]
    lng: f64,

    /// The radius of the circle, in degrees lat/lng.
    #[arg(short = 'r', long, default_value_t = 0.05)]
    radius: f64,

    /// The radius for generating tasks around a stop, in degrees lat/lng.
    #[arg(long, visible_alias = "stopRadius", default_value_t = 0.001)]
    stop_radius: f64,

    /// Types of tasks to generate.
    #[arg(long, visible_alias = "taskTypes", value_enum, num_args = 1.., default_values_t = TaskType::ALL)]
    task_types: Vec<TaskType>,

    /// The range of time allowed for completion, in seconds.
    #[arg(long, visible_alias = "planned_completion_time_range", default_value_t = 3600)]
    planned_completion_time_range: i64,

    /// A timezone identifier for generated timestamps.
    #[arg(long, default_value = DEFAULT_TIMEZONE)]
    timezone: String,

    /// Optional description stored at the top of the document.
    #[arg(long)]
    description: Option<String>,

    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,

    /// Enable debug logging.
    #[arg(short, long)]
    debug: bool,
}

impl Cli {
    fn to_config(&self) -> GeneratorConfig {
        let config = GeneratorConfig::default()
            .with_vehicles(non_negative(self.num_vehicles))
            .with_stops_per_vehicle(non_negative(self.num_stops))
            .with_tasks_per_stop(non_negative(self.num_tasks))
            .with_area(Circle::new(self.lat, self.lng, self.radius))
            .with_stop_radius(self.stop_radius)
            .with_task_types(self.task_types.clone())
            .with_completion_time_range(self.planned_completion_time_range)
            .with_timezone(self.timezone.clone());

        match &self.description {
            Some(description) => config.with_description(description.clone()),
            None => config,
        }
    }
}

/// Negative counts mean no iterations.
fn non_negative(count: i64) -> usize {
    usize::try_from(count).unwrap_or(0)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = cli.to_config();
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let document = fleet_gen::generate(&config, &mut rng)?;

    let summary = document.summary();
    info!(
        manifests = summary.manifests,
        stops = summary.stops,
        tasks = summary.tasks,
        timezone = %config.timezone,
        "Generated backend config"
    );

    write_pretty_json(&document, std::io::stdout().lock())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_library() {
        let cli = Cli::parse_from(["generate"]);
        assert_eq!(cli.to_config(), GeneratorConfig::default());
    }

    #[test]
    fn test_negative_counts_clamp_to_zero() {
        let cli = Cli::parse_from(["generate", "-v", "2", "-s", "-1", "-t", "-5"]);
        let config = cli.to_config();
        assert_eq!(config.vehicle_count, 2);
        assert_eq!(config.stops_per_vehicle, 0);
        assert_eq!(config.tasks_per_stop, 0);
    }

    #[test]
    fn test_legacy_flag_names() {
        let cli = Cli::parse_from([
            "generate",
            "--numVehicles",
            "4",
            "--epiLat",
            "-33.9",
            "--epiLng",
            "18.4",
            "--taskTypes",
            "PICKUP",
        ]);
        let config = cli.to_config();
        assert_eq!(config.vehicle_count, 4);
        assert_eq!(config.area.center_lat, -33.9);
        assert_eq!(config.area.center_lng, 18.4);
        assert_eq!(config.task_types, [TaskType::Pickup]);
    }

    #[test]
    fn test_non_numeric_count_rejected() {
        assert!(Cli::try_parse_from(["generate", "-v", "three"]).is_err());
    }

    #[test]
    fn test_description_and_seed() {
        let cli = Cli::parse_from(["generate", "--description", "Demo", "--seed", "7"]);
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.to_config().description.as_deref(), Some("Demo"));
    }
}
