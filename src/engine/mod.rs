pub mod classify;
pub mod dimension;
pub mod total;
pub mod veto;

pub use classify::classify;
pub use dimension::score_dimension;
pub use total::score_total;
pub use veto::evaluate_vetoes;

use crate::error::Result;
use crate::model::ScoringModel;
use crate::types::report::{EvaluationResult, Status};
use crate::types::scoring::Dataset;
use chrono::Utc;
use tracing::info;

/// Evaluates `dataset` against the built-in scoring model.
pub fn evaluate(app_name: &str, version: &str, dataset: &Dataset) -> Result<EvaluationResult> {
    evaluate_with(ScoringModel::standard(), app_name, version, dataset)
}

pub fn evaluate_with(
    model: &ScoringModel,
    app_name: &str,
    version: &str,
    dataset: &Dataset,
) -> Result<EvaluationResult> {
    let score = score_total(model, dataset)?;
    let vetoes = evaluate_vetoes(dataset);
    let status = Status::derive(&vetoes, score.level);

    info!(
        app = app_name,
        version,
        total = score.total,
        classification = score.level.label(),
        vetoes = vetoes.len(),
        status = status.as_str(),
        "evaluation complete"
    );

    Ok(EvaluationResult {
        app_name: app_name.to_string(),
        version: version.to_string(),
        evaluated_at: Utc::now().to_rfc3339(),
        total_score: score.total,
        classification: score.level,
        dimension_scores: score.dimensions,
        vetoes,
        status,
        raw_input: dataset.clone(),
    })
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::scoring::{Dimension, RiskLevel};

    fn set_value(dataset: &mut Dataset, dimension: Dimension, criterion: &str, value: f64) {
        dataset
            .entry(dimension)
            .or_default()
            .insert(criterion.to_string(), value);
    }

    #[test]
    fn low_risk_application_is_approved() {
        let dataset = fixtures::low_risk();
        let result = evaluate("Test App", "1.0", &dataset).expect("evaluation should succeed");

        assert_eq!(result.app_name, "Test App");
        assert_eq!(result.version, "1.0");
        assert!((result.total_score - 1.0).abs() < 1e-9);
        assert_eq!(result.classification, RiskLevel::Low);
        assert_eq!(result.status, Status::Approved);
        assert!(result.vetoes.is_empty());
        assert_eq!(result.raw_input, dataset);
        assert!(result.is_approved() && result.is_low_risk());
    }

    #[test]
    fn veto_blocks_low_risk_application() {
        let mut dataset = fixtures::low_risk();
        set_value(&mut dataset, Dimension::Experience, "user_error_rate", 1.5);

        let result = evaluate("Test App", "1.0", &dataset).expect("evaluation should succeed");
        assert_eq!(
            result.vetoes,
            vec!["production error rate > 1% on critical operations".to_string()]
        );
        assert_eq!(result.classification, RiskLevel::Low);
        assert!(result.is_blocked());
        assert!(!result.is_approved());
    }

    #[test]
    fn medium_risk_without_vetoes_is_conditional() {
        let result = evaluate("Test App", "1.0", &fixtures::medium_risk())
            .expect("evaluation should succeed");
        assert!(result.is_medium_risk());
        assert!(result.vetoes.is_empty());
        assert_eq!(result.status, Status::Conditional);
    }

    #[test]
    fn high_risk_without_vetoes_is_conditional() {
        let result = evaluate("Test App", "1.0", &fixtures::high_risk())
            .expect("evaluation should succeed");
        assert!(result.is_high_risk());
        assert!(result.is_conditional());
    }

    #[test]
    fn vetoes_always_force_blocked() {
        for dataset in [
            fixtures::low_risk(),
            fixtures::medium_risk(),
            fixtures::high_risk(),
        ] {
            let mut dataset = dataset;
            set_value(&mut dataset, Dimension::Defects, "critical_bugs", 1.0);
            let result = evaluate("Test App", "2.3.1", &dataset).expect("evaluation should succeed");
            assert!(!result.vetoes.is_empty());
            assert_eq!(result.status, Status::Blocked);
        }
    }

    #[test]
    fn near_threshold_application_is_approved() {
        let mut dataset = fixtures::low_risk();
        set_value(&mut dataset, Dimension::Defects, "defect_density", 1.2);
        set_value(&mut dataset, Dimension::Defects, "test_coverage", 94.0);
        set_value(&mut dataset, Dimension::Defects, "mtbf", 980.0);
        set_value(&mut dataset, Dimension::Performance, "response_time", 220.0);
        set_value(&mut dataset, Dimension::Performance, "p95_latency", 650.0);
        set_value(&mut dataset, Dimension::Performance, "throughput", 150.0);
        set_value(&mut dataset, Dimension::Experience, "user_error_rate", 0.9);
        set_value(&mut dataset, Dimension::Experience, "abandonment_rate", 3.2);

        let result = evaluate("Sample Service", "1.0", &dataset).expect("evaluation should succeed");
        assert!(result.is_approved());
        assert!((result.total_score - 1.0).abs() < 0.01);

        set_value(&mut dataset, Dimension::Experience, "user_error_rate", 1.8);
        let result = evaluate("Sample Service", "1.0", &dataset).expect("evaluation should succeed");
        assert!(result.is_blocked());
        assert_eq!(result.vetoes.len(), 1);
    }

    #[test]
    fn evaluation_with_custom_model_uses_its_weights() {
        let mut model = ScoringModel::build_standard();
        for (dimension, weight) in [
            (Dimension::Defects, 0.0),
            (Dimension::Performance, 1.0),
            (Dimension::Security, 0.0),
            (Dimension::Experience, 0.0),
        ] {
            if let Some(entry) = model.dimensions.get_mut(&dimension) {
                entry.weight = weight;
            }
        }

        let result = evaluate_with(&model, "Test App", "1.0", &fixtures::high_risk())
            .expect("evaluation should succeed");
        assert!((result.total_score - 3.0).abs() < 1e-9);
        assert!(result.is_high_risk());
    }
}
