use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Catalog integrity error: {}", .0.join("; "))]
    Catalog(Vec<String>),

    #[error("Email delivery failed: {0}")]
    Delivery(String),

    #[error("A submission is already in progress")]
    SubmissionInProgress,

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FolioError>;
