//! Manifest generation: one vehicle with its stops and tasks.

use rand::Rng;
use time::{Duration, OffsetDateTime};
use tracing::debug;

use crate::generators::stop::{GeneratedStop, StopGenerator};
use crate::generators::vehicle::VehicleGenerator;
use crate::ids::IdSequences;
use crate::models::Manifest;

/// Generates a vehicle's manifest.
#[derive(Debug, Clone)]
pub struct ManifestGenerator {
    vehicles: VehicleGenerator,
    stops: StopGenerator,
    stops_per_vehicle: usize,
}

impl ManifestGenerator {
    pub fn new(vehicles: VehicleGenerator, stops: StopGenerator, stops_per_vehicle: usize) -> Self {
        Self {
            vehicles,
            stops,
            stops_per_vehicle,
        }
    }

    /// Generates the vehicle, then its stops in order.
    ///
    /// After each stop the start time moves forward by one hour per task that
    /// stop received, so completion times never decrease across the manifest.
    pub fn generate(
        &self,
        ids: &mut IdSequences,
        start_time: OffsetDateTime,
        rng: &mut impl Rng,
    ) -> Manifest {
        let vehicle = self.vehicles.generate(ids);

        let mut stops = Vec::new();
        let mut tasks = Vec::new();
        for generated in self.generate_stops(ids, start_time, rng) {
            tasks.extend(generated.tasks);
            stops.push(generated.stop);
        }

        debug!(
            vehicle_id = %vehicle.vehicle_id,
            stops = stops.len(),
            tasks = tasks.len(),
            "Generated manifest"
        );

        Manifest {
            vehicle,
            tasks,
            stops,
        }
    }

    /// Lazily generates the manifest's stops on a shared time cursor.
    pub fn generate_stops<'a, R: Rng>(
        &'a self,
        ids: &'a mut IdSequences,
        start_time: OffsetDateTime,
        rng: &'a mut R,
    ) -> impl Iterator<Item = GeneratedStop> + 'a {
        let mut cursor = start_time;
        (0..self.stops_per_vehicle).map(move |_| {
            let generated = self.stops.generate(ids, cursor, rng);
            cursor += Duration::hours(generated.tasks.len() as i64);
            generated
        })
    }
}
