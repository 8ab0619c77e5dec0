//! Structural checks on generated documents.

use std::collections::{HashMap, HashSet};

use time::OffsetDateTime;

use crate::errors::IntegrityError;
use crate::models::{BackendConfig, Manifest, Task};

impl BackendConfig {
    /// Checks id uniqueness across the document and the consistency of every manifest.
    pub fn verify(&self) -> Result<(), IntegrityError> {
        let mut vehicles = HashSet::new();
        let mut stops = HashSet::new();
        let mut tasks = HashSet::new();
        let mut tracking = HashSet::new();

        for manifest in &self.manifests {
            insert_unique(&mut vehicles, "vehicle", &manifest.vehicle.vehicle_id)?;
            for stop in &manifest.stops {
                insert_unique(&mut stops, "stop", &stop.stop_id)?;
            }
            for task in &manifest.tasks {
                insert_unique(&mut tasks, "task", &task.task_id)?;
                insert_unique(&mut tracking, "tracking", &task.tracking_id)?;
            }
            manifest.verify()?;
        }
        Ok(())
    }
}

impl Manifest {
    /// Checks that stops reference exactly the manifest's tasks, each once, and
    /// that completion times do not decrease in stop order.
    pub fn verify(&self) -> Result<(), IntegrityError> {
        let owned: HashMap<&str, &Task> = self
            .tasks
            .iter()
            .map(|t| (t.task_id.as_str(), t))
            .collect();
        let mut referenced = HashSet::new();

        for stop in &self.stops {
            for task_id in &stop.tasks {
                if !owned.contains_key(task_id.as_str()) {
                    return Err(IntegrityError::UnknownTask {
                        stop_id: stop.stop_id.clone(),
                        task_id: task_id.clone(),
                    });
                }
                if !referenced.insert(task_id.as_str()) {
                    return Err(IntegrityError::SharedTask {
                        task_id: task_id.clone(),
                    });
                }
            }
        }

        if let Some(orphan) = self
            .tasks
            .iter()
            .find(|t| !referenced.contains(t.task_id.as_str()))
        {
            return Err(IntegrityError::OrphanTask {
                vehicle_id: self.vehicle.vehicle_id.clone(),
                task_id: orphan.task_id.clone(),
            });
        }

        // Completion times in stop order, then task order within the stop
        let mut previous: Option<OffsetDateTime> = None;
        for task_id in self.stops.iter().flat_map(|s| &s.tasks) {
            let Some(task) = owned.get(task_id.as_str()) else {
                continue;
            };
            if let Some(time) = task.planned_completion_time {
                if previous.is_some_and(|prev| time < prev) {
                    return Err(IntegrityError::TimestampOrder {
                        task_id: task_id.clone(),
                    });
                }
                previous = Some(time);
            }
        }

        Ok(())
    }
}

fn insert_unique<'a>(
    seen: &mut HashSet<&'a str>,
    kind: &'static str,
    id: &'a str,
) -> Result<(), IntegrityError> {
    if seen.insert(id) {
        Ok(())
    } else {
        Err(IntegrityError::DuplicateId {
            kind,
            id: id.to_string(),
        })
    }
}
