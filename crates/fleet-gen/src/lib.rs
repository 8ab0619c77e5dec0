//! Synthetic backend configuration generation for the fleet samples.
//!
//! Vehicles, stops, and tasks are scattered inside a geographic circle and
//! rendered as the JSON document the sample backend loads at startup. The
//! [`update`] module fills in `*****UPDATE_WITH_<NAME>*****` placeholders in
//! the samples' configuration files.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use fleet_gen::prelude::*;
//!
//! let config = GeneratorConfig::default()
//!     .with_vehicles(2)
//!     .with_stops_per_vehicle(4)
//!     .with_task_types([TaskType::Delivery]);
//!
//! let document = generate(&config, &mut rand::thread_rng())?;
//! println!("{}", to_pretty_json(&document)?);
//! ```

pub mod clock;
pub mod config;
pub mod errors;
pub mod generators;
pub mod ids;
pub mod models;
pub mod output;
pub mod sampling;
pub mod update;
mod verify;

use rand::Rng;

use crate::config::GeneratorConfig;
use crate::errors::GenerateError;
use crate::generators::BackendConfigGenerator;
use crate::models::BackendConfig;

/// Generates a complete, verified document anchored at the current time in
/// the configured timezone.
///
/// The configuration and timezone are checked before anything is generated.
pub fn generate(config: &GeneratorConfig, rng: &mut impl Rng) -> Result<BackendConfig, GenerateError> {
    let generator = BackendConfigGenerator::with_config(config)?;
    let start_time = clock::anchor_start_time(&config.timezone)?;

    let document = generator.generate(start_time, rng);
    document.verify()?;
    Ok(document)
}

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::clock::{anchor_at, anchor_start_time};
    pub use crate::config::{GeneratorConfig, SAN_FRANCISCO};
    pub use crate::errors::{GenerateError, IntegrityError, UpdateError};
    pub use crate::generate;
    pub use crate::generators::{
        BackendConfigGenerator, ManifestGenerator, StopGenConfig, StopGenerator, VehicleGenerator,
    };
    pub use crate::ids::{IdSequences, SequentialId};
    pub use crate::models::{
        BackendConfig, ConfigSummary, Manifest, Stop, Task, TaskType, Vehicle, Waypoint,
    };
    pub use crate::output::{to_pretty_json, write_pretty_json};
    pub use crate::sampling::{Circle, sample_point_in_circle};
    pub use crate::update::{ConfigItem, ConfigUpdater, UpdateOutcome, UpdateReport};
}
