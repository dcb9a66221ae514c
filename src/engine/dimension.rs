use super::classify::classify;
use crate::error::Result;
use crate::model::ScoringModel;
use crate::types::scoring::{Dimension, Score};
use std::collections::BTreeMap;
use tracing::debug;

/// Weighted mean tier of the configured criteria present in `values`.
///
/// Criteria the model does not know are ignored. Returns `0.0` when no
/// configured criterion was measured; that value means "no signal" and is
/// not a best-case score.
pub fn score_dimension(
    model: &ScoringModel,
    dimension: Dimension,
    values: &BTreeMap<String, f64>,
) -> Result<Score> {
    let configured = &model.require_dimension(dimension)?.criteria;
    let mut weighted_sum = 0.0;
    let mut used_weight = 0.0;

    for (key, value) in values {
        let Some(criterion) = configured.get(key) else {
            debug!(%dimension, criterion = %key, "ignoring unconfigured criterion");
            continue;
        };
        let tier = classify(model, dimension, key, *value)?;
        debug!(%dimension, criterion = %key, value, tier = tier.rank(), "classified criterion");
        weighted_sum += tier.value() * criterion.weight;
        used_weight += criterion.weight;
    }

    if used_weight == 0.0 {
        return Ok(0.0);
    }
    Ok(weighted_sum / used_weight)
}
