//! Entity generators for backend configuration documents.
//!
//! - [`VehicleGenerator`]: vehicles with sequential ids
//! - [`StopGenerator`]: stops inside the area, with tasks scattered around each stop
//! - [`ManifestGenerator`]: one vehicle's stops and tasks on a shared time cursor
//! - [`BackendConfigGenerator`]: one manifest per vehicle, wrapped in the root document

pub mod backend_config;
pub mod manifest;
pub mod stop;
pub mod vehicle;

pub use backend_config::BackendConfigGenerator;
pub use manifest::ManifestGenerator;
pub use stop::{GeneratedStop, StopGenConfig, StopGenerator};
pub use vehicle::VehicleGenerator;
