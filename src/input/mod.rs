pub mod json;
pub mod sheet;

use crate::error::{Result, RiskError};
use crate::model::ScoringModel;
use crate::types::scoring::Dataset;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

/// Loads a dataset from a `.csv` measurement sheet or a `.json` document.
pub fn load_dataset(path: &Path, model: &ScoringModel) -> Result<Dataset> {
    if !path.exists() {
        return Err(RiskError::PathNotFound(path.display().to_string()));
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    let reader = BufReader::new(File::open(path)?);

    let dataset = match extension.as_str() {
        "csv" => sheet::parse_measurements(reader, model)?,
        "json" => json::parse_measurements(reader)
            .map_err(|e| RiskError::InputParse(format!("{}: {}", path.display(), e)))?,
        other => {
            return Err(RiskError::InputParse(format!(
                "unsupported input format '{other}' for {}: expected .csv or .json",
                path.display()
            )))
        }
    };

    let measured = dataset.values().map(|values| values.len()).sum::<usize>();
    info!(path = %path.display(), dimensions = dataset.len(), measured, "loaded dataset");
    Ok(dataset)
}
