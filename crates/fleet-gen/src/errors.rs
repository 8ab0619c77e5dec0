use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Unknown timezone \"{name}\": {source}")]
    UnknownTimezone {
        name: String,
        #[source]
        source: jiff::Error,
    },

    #[error("Timezone offset out of range: {0}")]
    InvalidOffset(#[from] time::error::ComponentRange),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Generated document is inconsistent: {0}")]
    Integrity(#[from] IntegrityError),
}

/// Failure while patching placeholders in configuration files.
#[derive(Error, Debug)]
pub enum UpdateError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid placeholder pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Invalid command map: {0}")]
    Commands(#[from] serde_json::Error),

    #[error("Invalid item \"{0}\", expected NAME=FILE or NAME=FILE,OUTPUT")]
    InvalidItem(String),
}

/// A structural problem found while verifying a generated document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntegrityError {
    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },

    #[error("Stop {stop_id} references unknown task {task_id}")]
    UnknownTask { stop_id: String, task_id: String },

    #[error("Task {task_id} is not referenced by any stop of vehicle {vehicle_id}")]
    OrphanTask { vehicle_id: String, task_id: String },

    #[error("Task {task_id} is referenced by more than one stop")]
    SharedTask { task_id: String },

    #[error("Task {task_id} completes before the task preceding it")]
    TimestampOrder { task_id: String },
}
