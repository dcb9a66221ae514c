pub mod json;
pub mod md;

use crate::error::{Result, RiskError};
use crate::model::ScoringModel;
use crate::types::report::EvaluationResult;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(result: &EvaluationResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::to_json(result).map_err(RiskError::Json),
        OutputFormat::Md => Ok(md::to_markdown(result)),
    }
}

pub fn render_model(model: &ScoringModel, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::model_to_json(model).map_err(RiskError::Json),
        OutputFormat::Md => Ok(md::model_to_markdown(model)),
    }
}

/// `report_<app>_<version>.json`, with spaces in the app name replaced.
pub fn default_file_name(app_name: &str, version: &str) -> String {
    format!("report_{}_{}.json", app_name.trim().replace(' ', "_"), version)
}

pub fn write_json(result: &EvaluationResult, path: &Path) -> Result<PathBuf> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = json::to_json(result)?;
    fs::write(path, json)?;
    tracing::info!(path = %path.display(), "report written");
    Ok(path.to_path_buf())
}
