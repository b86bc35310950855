use thiserror::Error;

#[derive(Error, Debug)]
pub enum LifemapDataError {
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Topology has no object named {0:?}")]
    MissingObject(String),

    #[error("No {metric} values found{}", .year.map(|y| format!(" for {y}")).unwrap_or_default())]
    NoValues { metric: String, year: Option<u16> },
}
