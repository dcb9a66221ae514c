use crate::model::ScoringModel;
use crate::types::report::EvaluationResult;

pub fn to_json(result: &EvaluationResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}

pub fn model_to_json(model: &ScoringModel) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(model)
}
