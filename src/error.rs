use crate::types::scoring::Dimension;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RiskError {
    #[error("no scoring configuration for dimension {0}")]
    DimensionNotConfigured(Dimension),

    #[error("no scoring configuration for {dimension}.{criterion}")]
    ConfigNotFound {
        dimension: Dimension,
        criterion: String,
    },

    #[error("config file not found: {0}")]
    ConfigFileMissing(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("input parse error: {0}")]
    InputParse(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, RiskError>;
