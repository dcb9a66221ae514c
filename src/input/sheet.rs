use crate::error::{Result, RiskError};
use crate::model::ScoringModel;
use crate::types::scoring::{Dataset, Dimension};
use serde::{Deserialize, Deserializer};
use std::io::Read;
use tracing::{debug, warn};

pub const DIMENSION_COLUMN: &str = "Dimension";
pub const CRITERION_COLUMN: &str = "Criterion";
pub const VALUE_COLUMN: &str = "Current Value";

#[derive(Debug, Deserialize)]
struct MeasurementRow {
    #[serde(rename = "Dimension")]
    dimension: String,
    #[serde(rename = "Criterion")]
    criterion: String,
    #[serde(
        rename = "Current Value",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    value: Option<String>,
}

/// Reads a measurement sheet with `Dimension`, `Criterion` and
/// `Current Value` columns. Other columns are ignored.
///
/// Rows naming an unknown dimension or criterion, or carrying a blank or
/// non-numeric value, are skipped.
pub fn parse_measurements<R: Read>(reader: R, model: &ScoringModel) -> Result<Dataset> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let missing = [DIMENSION_COLUMN, CRITERION_COLUMN, VALUE_COLUMN]
        .into_iter()
        .filter(|column| !headers.iter().any(|header| header == *column))
        .collect::<Vec<_>>();
    if !missing.is_empty() {
        return Err(RiskError::InputParse(format!(
            "csv is missing required column(s): {}",
            missing.join(", ")
        )));
    }

    let mut dataset = Dataset::new();
    for record in csv_reader.deserialize::<MeasurementRow>() {
        let row = record?;

        let Some(dimension) = Dimension::parse(&row.dimension) else {
            debug!(dimension = %row.dimension, "skipping row with unknown dimension");
            continue;
        };
        let Some(criterion) = model.resolve_criterion(dimension, &row.criterion) else {
            debug!(%dimension, criterion = %row.criterion, "skipping row with unknown criterion");
            continue;
        };
        let Some(raw) = row.value else {
            continue;
        };

        match parse_value(&raw) {
            Some(value) => {
                dataset
                    .entry(dimension)
                    .or_default()
                    .insert(criterion.to_string(), value);
            }
            _ => {
                warn!(%dimension, criterion, value = %raw, "ignoring invalid measurement value");
            }
        }
    }

    Ok(dataset)
}

/// Accepts a single decimal comma (`0,8`). Values that could be thousands
/// grouping (`1,234`) or mix separators (`1.234,5`) are rejected.
fn parse_value(raw: &str) -> Option<f64> {
    let normalized = match raw.split_once(',') {
        None => raw.to_string(),
        Some((whole, fraction)) => {
            if raw.contains('.') || fraction.contains(',') {
                return None;
            }
            let digits = whole.trim_start_matches(['-', '+']);
            let grouped = fraction.len() == 3 && !digits.is_empty() && !digits.starts_with('0');
            if grouped {
                return None;
            }
            format!("{whole}.{fraction}")
        }
    };
    normalized.parse::<f64>().ok().filter(|value| value.is_finite())
}

fn empty_string_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
