mod standard;

use crate::error::{Result, RiskError};
use crate::types::scoring::Dimension;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::OnceLock;

const WEIGHT_SUM_TOLERANCE: f64 = 0.001;

/// Threshold pair and weight for one criterion.
///
/// Non-inverted criteria are better when lower (`low < mid`); inverted
/// criteria are better when higher (`low > mid`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriterionModel {
    pub label: String,
    pub weight: f64,
    pub low: f64,
    pub mid: f64,
    pub inverted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionModel {
    pub weight: f64,
    pub criteria: BTreeMap<String, CriterionModel>,
}

/// Weights and thresholds the engine scores against. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringModel {
    pub dimensions: BTreeMap<Dimension, DimensionModel>,
}

impl ScoringModel {
    /// The built-in model, shared by every evaluation in the process.
    pub fn standard() -> &'static ScoringModel {
        static STANDARD: OnceLock<ScoringModel> = OnceLock::new();
        STANDARD.get_or_init(Self::build_standard)
    }

    pub fn build_standard() -> ScoringModel {
        let mut dimensions = standard::DIMENSION_WEIGHTS
            .iter()
            .map(|(dimension, weight)| {
                (
                    *dimension,
                    DimensionModel {
                        weight: *weight,
                        criteria: BTreeMap::new(),
                    },
                )
            })
            .collect::<BTreeMap<_, _>>();

        for spec in &standard::CRITERIA {
            if let Some(dimension) = dimensions.get_mut(&spec.dimension) {
                dimension.criteria.insert(
                    spec.key.to_string(),
                    CriterionModel {
                        label: spec.label.to_string(),
                        weight: spec.weight,
                        low: spec.low,
                        mid: spec.mid,
                        inverted: spec.inverted,
                    },
                );
            }
        }

        ScoringModel { dimensions }
    }

    pub fn dimension(&self, dimension: Dimension) -> Option<&DimensionModel> {
        self.dimensions.get(&dimension)
    }

    pub fn require_dimension(&self, dimension: Dimension) -> Result<&DimensionModel> {
        self.dimension(dimension)
            .ok_or(RiskError::DimensionNotConfigured(dimension))
    }

    pub fn criterion(&self, dimension: Dimension, key: &str) -> Result<&CriterionModel> {
        self.dimension(dimension)
            .and_then(|model| model.criteria.get(key))
            .ok_or_else(|| RiskError::ConfigNotFound {
                dimension,
                criterion: key.to_string(),
            })
    }

    /// Resolves a criterion by key or label, ignoring case.
    pub fn resolve_criterion(&self, dimension: Dimension, name: &str) -> Option<&str> {
        let needle = name.trim();
        self.dimension(dimension)?
            .criteria
            .iter()
            .find(|(key, criterion)| {
                key.eq_ignore_ascii_case(needle) || criterion.label.eq_ignore_ascii_case(needle)
            })
            .map(|(key, _)| key.as_str())
    }

    pub fn validate(&self) -> Result<()> {
        let missing = Dimension::ALL
            .iter()
            .filter(|dimension| !self.dimensions.contains_key(dimension))
            .map(|dimension| dimension.key())
            .collect::<Vec<_>>();
        if !missing.is_empty() {
            return Err(RiskError::ConfigParse(format!(
                "scoring model is missing dimension(s): {}",
                missing.join(", ")
            )));
        }

        validate_weights(
            "dimensions",
            self.dimensions
                .iter()
                .map(|(dimension, model)| (dimension.key(), model.weight)),
        )?;

        for (dimension, model) in &self.dimensions {
            if model.criteria.is_empty() {
                return Err(RiskError::ConfigParse(format!(
                    "dimensions.{dimension} has no criteria"
                )));
            }
            validate_weights(
                &format!("dimensions.{dimension}.criteria"),
                model
                    .criteria
                    .iter()
                    .map(|(key, criterion)| (key.as_str(), criterion.weight)),
            )?;
            for (key, criterion) in &model.criteria {
                validate_thresholds(dimension, key, criterion)?;
            }
        }

        Ok(())
    }
}

fn validate_weights<'a>(scope: &str, weights: impl Iterator<Item = (&'a str, f64)>) -> Result<()> {
    let mut sum = 0.0;
    for (key, weight) in weights {
        if !(0.0..=1.0).contains(&weight) {
            return Err(RiskError::ConfigParse(format!(
                "{scope}.{key}.weight must be between 0.0 and 1.0 (found {weight})"
            )));
        }
        sum += weight;
    }
    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(RiskError::ConfigParse(format!(
            "{scope} weights must sum to 1.0 (found {sum:.3})"
        )));
    }
    Ok(())
}

fn validate_thresholds(dimension: &Dimension, key: &str, criterion: &CriterionModel) -> Result<()> {
    if !criterion.low.is_finite() || !criterion.mid.is_finite() {
        return Err(RiskError::ConfigParse(format!(
            "dimensions.{dimension}.criteria.{key} thresholds must be finite numbers"
        )));
    }
    let ordered = if criterion.inverted {
        criterion.low > criterion.mid
    } else {
        criterion.low < criterion.mid
    };
    if !ordered {
        let expected = if criterion.inverted { ">" } else { "<" };
        return Err(RiskError::ConfigParse(format!(
            "dimensions.{dimension}.criteria.{key} requires low {expected} mid (low = {}, mid = {}, inverted = {})",
            criterion.low, criterion.mid, criterion.inverted
        )));
    }
    Ok(())
}
