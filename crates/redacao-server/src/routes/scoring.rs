use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::Deserialize;
use tracing::{debug, error, info};

use redacao_core::models::essay::NewEssay;
use redacao_core::models::scoring::ScoringResult;
use redacao_core::validation::validate_essay;
use redacao_gemini::scoring;

use crate::error::ApiError;
use crate::middleware::identity::CurrentUser;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ScoreRequest {
    #[serde(default, deserialize_with = "super::string_field")]
    pub redacao: Option<String>,
    #[serde(default, deserialize_with = "super::string_field")]
    pub tema: Option<String>,
}

/// Grade an essay with the model, then try to save it.
///
/// The score is returned even if saving fails; the write error is only
/// logged.
pub async fn score_essay(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> Result<Json<ScoringResult>, ApiError> {
    let req = payload.map(|Json(req)| req).unwrap_or_else(|rejection| {
        debug!(%rejection, "unreadable scoring request body");
        ScoreRequest::default()
    });

    let text = validate_essay(req.redacao.as_deref())?;

    let result = scoring::score_essay(state.model.as_ref(), text)
        .await
        .map_err(|e| ApiError::upstream("Erro ao processar a correção.", e))?;

    let essay = NewEssay::scored(user_id, req.tema.as_deref(), text, result.clone());
    match state.store.insert(&essay).await {
        Ok(essay_id) => info!(
            essay_id,
            user_id,
            final_score = result.final_score,
            "scored essay saved"
        ),
        Err(e) => error!(error = %e, user_id, "failed to save scored essay"),
    }

    Ok(Json(result))
}
