//! Stop generation with the tasks serviced at each stop.

use rand::Rng;
use time::{Duration, OffsetDateTime};

use crate::config::GeneratorConfig;
use crate::errors::GenerateError;
use crate::ids::IdSequences;
use crate::models::{DEFAULT_TASK_DURATION_SECONDS, Stop, Task, TaskType};
use crate::sampling::Circle;

/// A stop together with the tasks it references.
#[derive(Debug, Clone)]
pub struct GeneratedStop {
    pub stop: Stop,
    pub tasks: Vec<Task>,
}

/// Configuration for stop generation.
#[derive(Debug, Clone)]
pub struct StopGenConfig {
    /// Circle stops are placed in.
    pub area: Circle,
    /// Radius around the stop that its tasks are placed in.
    pub stop_radius: f64,
    pub tasks_per_stop: usize,
    pub task_types: Vec<TaskType>,
    pub completion_time_range_seconds: i64,
}

impl From<&GeneratorConfig> for StopGenConfig {
    fn from(config: &GeneratorConfig) -> Self {
        Self {
            area: config.area,
            stop_radius: config.stop_radius,
            tasks_per_stop: config.tasks_per_stop,
            task_types: config.task_types.clone(),
            completion_time_range_seconds: config.completion_time_range_seconds,
        }
    }
}

/// Generates stops and their tasks.
#[derive(Debug, Clone)]
pub struct StopGenerator {
    config: StopGenConfig,
}

impl StopGenConfig {
    /// Fails if tasks are requested without any task type to pick from.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.tasks_per_stop > 0 && self.task_types.is_empty() {
            return Err(GenerateError::InvalidConfig(
                "at least one task type is required to generate tasks".to_string(),
            ));
        }
        Ok(())
    }
}

impl StopGenerator {
    pub fn with_config(config: StopGenConfig) -> Result<Self, GenerateError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Generates one stop inside the area and its tasks around it.
    ///
    /// Task `i` is planned to complete `i` hours after `start_time`. The stop id
    /// is allocated after the task ids.
    pub fn generate(
        &self,
        ids: &mut IdSequences,
        start_time: OffsetDateTime,
        rng: &mut impl Rng,
    ) -> GeneratedStop {
        let waypoint = self.config.area.random_waypoint(rng);
        let task_area = Circle::around(&waypoint, self.config.stop_radius);

        let tasks: Vec<Task> = (0..self.config.tasks_per_stop)
            .map(|i| {
                let planned_waypoint = task_area.random_waypoint(rng);
                let task_type =
                    self.config.task_types[rng.gen_range(0..self.config.task_types.len())];

                Task {
                    task_id: ids.task.next_id(),
                    tracking_id: ids.tracking.next_id(),
                    planned_waypoint,
                    task_type,
                    planned_completion_time: Some(start_time + Duration::hours(i as i64)),
                    planned_completion_time_range: self.config.completion_time_range_seconds,
                    duration_seconds: DEFAULT_TASK_DURATION_SECONDS,
                    contact_name: Some(ids.contact_name.next_id()),
                    description: None,
                }
            })
            .collect();

        let stop = Stop {
            stop_id: ids.stop.next_id(),
            planned_waypoint: waypoint,
            tasks: tasks.iter().map(|t| t.task_id.clone()).collect(),
        };

        GeneratedStop { stop, tasks }
    }
}
