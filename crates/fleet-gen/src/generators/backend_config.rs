//! Generation of the root document.

use rand::Rng;
use time::OffsetDateTime;
use tracing::debug;

use crate::config::GeneratorConfig;
use crate::errors::GenerateError;
use crate::generators::manifest::ManifestGenerator;
use crate::generators::stop::{StopGenConfig, StopGenerator};
use crate::generators::vehicle::VehicleGenerator;
use crate::ids::IdSequences;
use crate::models::BackendConfig;

/// Generates a [`BackendConfig`] with one manifest per vehicle.
#[derive(Debug, Clone)]
pub struct BackendConfigGenerator {
    manifests: ManifestGenerator,
    vehicle_count: usize,
    description: Option<String>,
}

impl BackendConfigGenerator {
    /// Creates a generator from a validated configuration.
    pub fn with_config(config: &GeneratorConfig) -> Result<Self, GenerateError> {
        config.validate()?;

        let stops = StopGenerator::with_config(StopGenConfig::from(config))?;
        let manifests =
            ManifestGenerator::new(VehicleGenerator::new(), stops, config.stops_per_vehicle);

        Ok(Self {
            manifests,
            vehicle_count: config.vehicle_count,
            description: config.description.clone(),
        })
    }

    /// Generates the document with fresh id sequences.
    ///
    /// Every manifest's completion times start at `start_time`.
    pub fn generate(&self, start_time: OffsetDateTime, rng: &mut impl Rng) -> BackendConfig {
        let mut ids = IdSequences::new();
        self.generate_with_ids(&mut ids, start_time, rng)
    }

    /// Generates the document, continuing the given id sequences.
    pub fn generate_with_ids(
        &self,
        ids: &mut IdSequences,
        start_time: OffsetDateTime,
        rng: &mut impl Rng,
    ) -> BackendConfig {
        let manifests = (0..self.vehicle_count)
            .map(|_| self.manifests.generate(ids, start_time, rng))
            .collect::<Vec<_>>();

        debug!(manifests = manifests.len(), "Generated backend config");

        BackendConfig {
            manifests,
            description: self.description.clone(),
        }
    }
}
