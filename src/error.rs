use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("No home directory")]
    NoHomeDir,

    #[error("Task '{task}' has failure probability {value}; must be strictly between 0 and 1")]
    InvalidProbability { task: String, value: f64 },

    #[error("Task '{task}' has duration {value}; must be positive")]
    InvalidDuration { task: String, value: f64 },

    #[error("Task name must be non-empty")]
    EmptyTaskName,

    #[error("Duplicate task name: {0}")]
    DuplicateTask(String),

    #[error("Task '{task}' depends on unknown task '{dependency}'")]
    UnknownDependency { task: String, dependency: String },

    #[error("Task '{task}' depends on itself")]
    SelfDependency { task: String },

    #[error("Task table is empty")]
    EmptyTable,

    #[error("Dependency cycle involving task '{task}'; no valid sequence exists")]
    CyclicDependency { task: String },

    #[error("No feasible task ordering exists")]
    NoFeasibleOrdering,

    #[error("Table has {count} tasks; exhaustive search is capped at {max}")]
    TooManyTasks { count: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
