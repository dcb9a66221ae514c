use crate::error::Result;
use crate::model::{CriterionModel, ScoringModel};
use crate::types::scoring::{Dimension, Tier};

pub fn classify(
    model: &ScoringModel,
    dimension: Dimension,
    criterion: &str,
    value: f64,
) -> Result<Tier> {
    let threshold = model.criterion(dimension, criterion)?;
    Ok(tier_for(threshold, value))
}

/// Boundary values fall into the lower-risk tier in both directions.
pub(crate) fn tier_for(threshold: &CriterionModel, value: f64) -> Tier {
    if threshold.inverted {
        if value >= threshold.low {
            Tier::Low
        } else if value >= threshold.mid {
            Tier::Medium
        } else {
            Tier::High
        }
    } else if value <= threshold.low {
        Tier::Low
    } else if value <= threshold.mid {
        Tier::Medium
    } else {
        Tier::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RiskError;

    const EPSILON: f64 = 1e-6;

    fn standard() -> &'static ScoringModel {
        ScoringModel::standard()
    }

    #[test]
    fn classifies_lower_is_better_criterion() {
        let model = standard();
        let tier = |value| {
            classify(model, Dimension::Defects, "defect_density", value)
                .expect("criterion should be configured")
        };
        assert_eq!(tier(1.5), Tier::Low);
        assert_eq!(tier(2.0), Tier::Low);
        assert_eq!(tier(3.5), Tier::Medium);
        assert_eq!(tier(5.0), Tier::Medium);
        assert_eq!(tier(5.1), Tier::High);
    }

    #[test]
    fn classifies_higher_is_better_criterion() {
        let model = standard();
        let tier = |value| {
            classify(model, Dimension::Defects, "test_coverage", value)
                .expect("criterion should be configured")
        };
        assert_eq!(tier(95.0), Tier::Low);
        assert_eq!(tier(90.0), Tier::Low);
        assert_eq!(tier(80.0), Tier::Medium);
        assert_eq!(tier(70.0), Tier::Medium);
        assert_eq!(tier(69.9), Tier::High);
    }

    #[test]
    fn ordinal_security_scales_treat_zero_as_worst() {
        let model = standard();
        for key in ["authentication", "pentest"] {
            let tier = |value| {
                classify(model, Dimension::Security, key, value)
                    .expect("criterion should be configured")
            };
            assert_eq!(tier(2.0), Tier::Low, "{key} = 2");
            assert_eq!(tier(1.0), Tier::Medium, "{key} = 1");
            assert_eq!(tier(0.0), Tier::High, "{key} = 0");
        }
    }

    #[test]
    fn boundaries_hold_for_every_configured_criterion() {
        let model = standard();
        for (dimension, dimension_model) in &model.dimensions {
            for (key, criterion) in &dimension_model.criteria {
                let tier = |value| {
                    classify(model, *dimension, key, value).expect("criterion should be configured")
                };
                let step = if criterion.inverted { -EPSILON } else { EPSILON };

                assert_eq!(tier(criterion.low), Tier::Low, "{dimension}.{key} at low");
                assert_eq!(
                    tier(criterion.low + step),
                    Tier::Medium,
                    "{dimension}.{key} just past low"
                );
                assert_eq!(tier(criterion.mid), Tier::Medium, "{dimension}.{key} at mid");
                assert_eq!(
                    tier(criterion.mid + step),
                    Tier::High,
                    "{dimension}.{key} just past mid"
                );
            }
        }
    }

    #[test]
    fn unknown_criterion_is_a_configuration_error() {
        let result = classify(standard(), Dimension::Experience, "latency", 1.0);
        assert!(matches!(result, Err(RiskError::ConfigNotFound { .. })));
    }
}
