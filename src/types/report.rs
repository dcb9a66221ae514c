use crate::types::scoring::{Dataset, Dimension, RiskLevel, Score};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Release gate outcome for an evaluated application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Approved,
    Conditional,
    Blocked,
}

impl Status {
    /// Vetoes take precedence over the score band.
    pub fn derive(vetoes: &[String], level: RiskLevel) -> Self {
        if !vetoes.is_empty() {
            Status::Blocked
        } else if level == RiskLevel::Low {
            Status::Approved
        } else {
            Status::Conditional
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Approved => "APPROVED",
            Status::Conditional => "CONDITIONAL",
            Status::Blocked => "BLOCKED",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationResult {
    pub app_name: String,
    pub version: String,
    pub evaluated_at: String,
    pub total_score: Score,
    pub classification: RiskLevel,
    pub dimension_scores: BTreeMap<Dimension, Score>,
    pub vetoes: Vec<String>,
    pub status: Status,
    pub raw_input: Dataset,
}

impl EvaluationResult {
    pub fn is_approved(&self) -> bool {
        self.status == Status::Approved
    }

    pub fn is_conditional(&self) -> bool {
        self.status == Status::Conditional
    }

    pub fn is_blocked(&self) -> bool {
        self.status == Status::Blocked
    }

    pub fn is_low_risk(&self) -> bool {
        self.classification == RiskLevel::Low
    }

    pub fn is_medium_risk(&self) -> bool {
        self.classification == RiskLevel::Medium
    }

    pub fn is_high_risk(&self) -> bool {
        self.classification == RiskLevel::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_derivation_table() {
        let veto = vec!["bug blocking primary customer flow".to_string()];
        assert_eq!(Status::derive(&veto, RiskLevel::Low), Status::Blocked);
        assert_eq!(Status::derive(&veto, RiskLevel::High), Status::Blocked);
        assert_eq!(Status::derive(&[], RiskLevel::Low), Status::Approved);
        assert_eq!(Status::derive(&[], RiskLevel::Medium), Status::Conditional);
        assert_eq!(Status::derive(&[], RiskLevel::High), Status::Conditional);
    }

    #[test]
    fn status_serializes_upper_case() {
        let rendered =
            serde_json::to_string(&Status::Conditional).expect("status should serialize");
        assert_eq!(rendered, "\"CONDITIONAL\"");
    }
}
