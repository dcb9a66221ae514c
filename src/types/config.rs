use crate::error::{Result, RiskError};
use crate::model::ScoringModel;
use crate::types::scoring::Dimension;
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RiskConfig {
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    #[serde(default)]
    pub dimensions: BTreeMap<Dimension, DimensionOverride>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DimensionOverride {
    pub weight: Option<f64>,
    #[serde(default)]
    pub criteria: BTreeMap<String, CriterionOverride>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CriterionOverride {
    pub label: Option<String>,
    pub weight: Option<f64>,
    pub low: Option<f64>,
    pub mid: Option<f64>,
    pub inverted: Option<bool>,
}

impl RiskConfig {
    pub fn validate(&self) -> Result<()> {
        let level = self.telemetry.log_level.trim();
        if level.is_empty() {
            return Err(RiskError::ConfigParse(
                "telemetry.log_level must not be empty".to_string(),
            ));
        }
        EnvFilter::try_new(level).map_err(|e| {
            RiskError::ConfigParse(format!(
                "telemetry.log_level '{}' is not a valid log filter: {e}",
                self.telemetry.log_level
            ))
        })?;
        Ok(())
    }

    /// The built-in model with this config's overrides applied, validated.
    pub fn scoring_model(&self) -> Result<ScoringModel> {
        self.validate()?;
        let mut model = ScoringModel::build_standard();

        for (dimension, overrides) in &self.dimensions {
            let target = model.dimensions.get_mut(dimension).ok_or_else(|| {
                RiskError::ConfigParse(format!("unknown dimension: {dimension}"))
            })?;
            if let Some(weight) = overrides.weight {
                target.weight = weight;
            }

            for (key, criterion) in &overrides.criteria {
                let entry = target.criteria.get_mut(key).ok_or_else(|| {
                    RiskError::ConfigParse(format!(
                        "dimensions.{dimension}.criteria contains unknown criterion: {key}"
                    ))
                })?;
                if let Some(label) = &criterion.label {
                    entry.label = label.clone();
                }
                if let Some(weight) = criterion.weight {
                    entry.weight = weight;
                }
                if let Some(low) = criterion.low {
                    entry.low = low;
                }
                if let Some(mid) = criterion.mid {
                    entry.mid = mid;
                }
                if let Some(inverted) = criterion.inverted {
                    entry.inverted = inverted;
                }
            }
        }

        model.validate()?;
        Ok(model)
    }
}
