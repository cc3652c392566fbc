use tracing::{info, warn};

use redacao_core::models::scoring::ScoringResult;

use crate::error::GeminiError;
use crate::model::GenerativeModel;
use crate::prompt::{build_scoring_prompt, scoring_schema};

/// Ask the model to grade an essay and parse its verdict.
///
/// One attempt only. A final score that does not add up to the competencies
/// is logged and passed through unchanged.
pub async fn score_essay(
    model: &dyn GenerativeModel,
    essay: &str,
) -> Result<ScoringResult, GeminiError> {
    let prompt = build_scoring_prompt(essay);
    let schema = scoring_schema();

    info!(essay_chars = essay.chars().count(), "requesting essay score");

    let response_text = model.generate_json(&prompt, &schema).await?;

    let result: ScoringResult = serde_json::from_str(&response_text).map_err(|e| {
        GeminiError::SchemaViolation(format!(
            "failed to parse ScoringResult: {e}. Response: {response_text}"
        ))
    })?;

    if !result.is_consistent() {
        warn!(
            final_score = result.final_score,
            competency_sum = result.competency_sum(),
            "final score does not match competency sum"
        );
    }

    info!(final_score = result.final_score, "essay scored");
    Ok(result)
}
