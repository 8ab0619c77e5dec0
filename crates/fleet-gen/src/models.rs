//! Entities of a backend configuration document.
//!
//! Every optional field is skipped when unset so the rendered document only
//! carries values that were actually generated. List fields are always
//! rendered, even when empty.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Default allowed completion window for a task, in seconds.
pub const DEFAULT_COMPLETION_TIME_RANGE_SECONDS: i64 = 3600;

/// Default time spent servicing a task, in seconds.
pub const DEFAULT_TASK_DURATION_SECONDS: i64 = 60;

/// A geographic point with an optional label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Waypoint {
    pub lat: f64,
    pub lng: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Waypoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            description: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vehicle {
    pub vehicle_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Kind of work performed at a task's location.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskType {
    #[value(name = "PICKUP", alias = "pickup")]
    Pickup,
    #[value(name = "DELIVERY", alias = "delivery")]
    Delivery,
}

impl TaskType {
    pub const ALL: [TaskType; 2] = [TaskType::Pickup, TaskType::Delivery];
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Task {
    pub task_id: String,
    pub tracking_id: String,
    pub planned_waypoint: Waypoint,
    pub task_type: TaskType,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub planned_completion_time: Option<OffsetDateTime>,
    pub planned_completion_time_range: i64,
    pub duration_seconds: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A location visited by a vehicle. `tasks` holds ids of tasks owned by the
/// enclosing [`Manifest`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stop {
    pub stop_id: String,
    pub planned_waypoint: Waypoint,
    pub tasks: Vec<String>,
}

/// One vehicle's full assignment of stops and tasks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Manifest {
    pub vehicle: Vehicle,
    pub tasks: Vec<Task>,
    pub stops: Vec<Stop>,
}

/// Root document handed to the backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackendConfig {
    pub manifests: Vec<Manifest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Entity counts of a generated document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConfigSummary {
    pub manifests: usize,
    pub stops: usize,
    pub tasks: usize,
}

impl BackendConfig {
    pub fn summary(&self) -> ConfigSummary {
        self.manifests
            .iter()
            .fold(ConfigSummary::default(), |acc, manifest| ConfigSummary {
                manifests: acc.manifests + 1,
                stops: acc.stops + manifest.stops.len(),
                tasks: acc.tasks + manifest.tasks.len(),
            })
    }
}
