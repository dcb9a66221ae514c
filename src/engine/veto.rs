use crate::types::scoring::{Dataset, Dimension};
use tracing::debug;

/// Hard stop that blocks a release whenever the measured value exceeds `limit`,
/// regardless of the weighted score.
#[derive(Debug, Clone, Copy)]
pub struct VetoRule {
    pub dimension: Dimension,
    pub criterion: &'static str,
    pub limit: f64,
    pub description: &'static str,
}

impl VetoRule {
    /// `None` when the dataset does not carry the rule's criterion.
    pub fn check(&self, dataset: &Dataset) -> Option<bool> {
        dataset
            .get(&self.dimension)
            .and_then(|values| values.get(self.criterion))
            .map(|value| *value > self.limit)
    }
}

pub const VETO_RULES: [VetoRule; 4] = [
    VetoRule {
        dimension: Dimension::Security,
        criterion: "critical_vulnerabilities",
        limit: 0.0,
        description: "unmitigated critical security vulnerability",
    },
    VetoRule {
        dimension: Dimension::Performance,
        criterion: "p95_latency",
        limit: 3000.0,
        description: "P95 latency > 3000ms on critical operations",
    },
    VetoRule {
        dimension: Dimension::Defects,
        criterion: "critical_bugs",
        limit: 0.0,
        description: "bug blocking primary customer flow",
    },
    VetoRule {
        dimension: Dimension::Experience,
        criterion: "user_error_rate",
        limit: 1.0,
        description: "production error rate > 1% on critical operations",
    },
];

/// Descriptions of the triggered rules, in rule order.
pub fn evaluate_vetoes(dataset: &Dataset) -> Vec<String> {
    VETO_RULES
        .iter()
        .filter(|rule| match rule.check(dataset) {
            Some(triggered) => triggered,
            None => {
                debug!(
                    dimension = %rule.dimension,
                    criterion = rule.criterion,
                    "veto skipped, criterion not measured"
                );
                false
            }
        })
        .map(|rule| rule.description.to_string())
        .collect()
}
