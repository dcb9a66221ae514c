use super::dimension::score_dimension;
use crate::error::Result;
use crate::model::ScoringModel;
use crate::types::scoring::{Dataset, RiskLevel, RiskScore};
use std::collections::BTreeMap;
use tracing::debug;

/// Sums each measured dimension's score times its weight.
///
/// Dimensions absent from `dataset` contribute nothing and the remaining
/// weights are not renormalized.
pub fn score_total(model: &ScoringModel, dataset: &Dataset) -> Result<RiskScore> {
    let mut dimensions = BTreeMap::new();
    let mut total = 0.0;

    for (dimension, values) in dataset {
        let weight = model.require_dimension(*dimension)?.weight;
        let score = score_dimension(model, *dimension, values)?;
        debug!(%dimension, score, weight, "scored dimension");
        dimensions.insert(*dimension, score);
        total += score * weight;
    }

    Ok(RiskScore {
        total,
        level: RiskLevel::from_total(total),
        dimensions,
    })
}
