use crate::model::ScoringModel;
use crate::types::report::EvaluationResult;

pub fn to_markdown(result: &EvaluationResult) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "# Risk Report: {} v{}\n\n",
        result.app_name, result.version
    ));
    output.push_str(&format!("Evaluated at: {}\n\n", result.evaluated_at));
    output.push_str(&format!("Classification: {}\n", result.classification));
    output.push_str(&format!("Score: {:.2}\n", result.total_score));
    output.push_str(&format!("Status: {}\n\n", result.status));

    output.push_str("## Vetoes\n\n");
    if result.vetoes.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for veto in &result.vetoes {
            output.push_str(&format!("- {veto}\n"));
        }
        output.push('\n');
    }

    output.push_str("## Dimension Scores\n\n");
    if result.dimension_scores.is_empty() {
        output.push_str("- none\n");
    } else {
        for (dimension, score) in &result.dimension_scores {
            output.push_str(&format!("- {}: {:.2}\n", dimension.label(), score));
        }
    }

    output
}

pub fn model_to_markdown(model: &ScoringModel) -> String {
    let mut output = String::new();
    output.push_str("# Scoring Model\n\n");
    for (dimension, dimension_model) in &model.dimensions {
        output.push_str(&format!(
            "## {} (weight {:.2})\n\n",
            dimension.label(),
            dimension_model.weight
        ));
        output.push_str("| criterion | weight | low | mid | higher is better |\n");
        output.push_str("|---|---|---|---|---|\n");
        for (key, criterion) in &dimension_model.criteria {
            output.push_str(&format!(
                "| {} (`{}`) | {:.2} | {} | {} | {} |\n",
                criterion.label,
                key,
                criterion.weight,
                criterion.low,
                criterion.mid,
                if criterion.inverted { "yes" } else { "no" }
            ));
        }
        output.push('\n');
    }
    output
}
