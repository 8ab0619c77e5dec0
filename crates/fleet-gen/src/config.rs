//! Configuration types for backend config generation.

use serde::{Deserialize, Serialize};

use crate::errors::GenerateError;
use crate::generators::StopGenConfig;
use crate::models::{DEFAULT_COMPLETION_TIME_RANGE_SECONDS, TaskType};
use crate::sampling::Circle;

/// San Francisco, the area the fleet samples are demoed in.
pub const SAN_FRANCISCO: Circle = Circle::new(37.8, -122.4, 0.05);

pub const DEFAULT_TIMEZONE: &str = "America/Los_Angeles";

/// Configuration for one generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of vehicles, one manifest each.
    pub vehicle_count: usize,

    pub stops_per_vehicle: usize,

    pub tasks_per_stop: usize,

    /// Circle stops are placed in.
    pub area: Circle,

    /// Radius around a stop that its tasks are placed in, in degrees lat/lng.
    pub stop_radius: f64,

    /// Task types drawn uniformly for each task.
    pub task_types: Vec<TaskType>,

    /// Allowed completion window of each task, in seconds.
    pub completion_time_range_seconds: i64,

    /// IANA timezone the first completion time is anchored in.
    pub timezone: String,

    /// Optional description of the whole document.
    pub description: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            vehicle_count: 3,
            stops_per_vehicle: 5,
            tasks_per_stop: 3,
            area: SAN_FRANCISCO,
            stop_radius: 0.001,
            task_types: TaskType::ALL.to_vec(),
            completion_time_range_seconds: DEFAULT_COMPLETION_TIME_RANGE_SECONDS,
            timezone: DEFAULT_TIMEZONE.to_string(),
            description: None,
        }
    }
}

impl GeneratorConfig {
    pub fn with_vehicles(mut self, count: usize) -> Self {
        self.vehicle_count = count;
        self
    }

    pub fn with_stops_per_vehicle(mut self, count: usize) -> Self {
        self.stops_per_vehicle = count;
        self
    }

    pub fn with_tasks_per_stop(mut self, count: usize) -> Self {
        self.tasks_per_stop = count;
        self
    }

    /// Sets the circle stops are generated in.
    pub fn with_area(mut self, area: Circle) -> Self {
        self.area = area;
        self
    }

    pub fn with_stop_radius(mut self, radius: f64) -> Self {
        self.stop_radius = radius;
        self
    }

    pub fn with_task_types(mut self, task_types: impl Into<Vec<TaskType>>) -> Self {
        self.task_types = task_types.into();
        self
    }

    pub fn with_completion_time_range(mut self, seconds: i64) -> Self {
        self.completion_time_range_seconds = seconds;
        self
    }

    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = timezone.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Checks the values generation relies on.
    ///
    /// Zero counts are valid and produce empty lists.
    pub fn validate(&self) -> Result<(), GenerateError> {
        let coordinates = [
            ("center latitude", self.area.center_lat),
            ("center longitude", self.area.center_lng),
            ("radius", self.area.radius),
            ("stop radius", self.stop_radius),
        ];
        for (name, value) in coordinates {
            if !value.is_finite() {
                return Err(GenerateError::InvalidConfig(format!(
                    "{name} must be a finite number, got {value}"
                )));
            }
        }
        if self.area.radius < 0.0 || self.stop_radius < 0.0 {
            return Err(GenerateError::InvalidConfig(
                "radii must not be negative".to_string(),
            ));
        }
        StopGenConfig::from(self).validate()
    }
}
