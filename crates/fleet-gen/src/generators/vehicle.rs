//! Vehicle generation.

use crate::ids::IdSequences;
use crate::models::Vehicle;

/// Generates vehicles with sequential ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct VehicleGenerator;

impl VehicleGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate(&self, ids: &mut IdSequences) -> Vehicle {
        Vehicle {
            vehicle_id: ids.vehicle.next_id(),
            description: None,
        }
    }
}
