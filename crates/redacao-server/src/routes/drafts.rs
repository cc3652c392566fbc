use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use redacao_core::models::essay::NewEssay;
use redacao_core::validation::validate_draft;

use crate::error::ApiError;
use crate::middleware::identity::CurrentUser;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct DraftRequest {
    #[serde(default, deserialize_with = "super::string_field")]
    pub redacao: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DraftSaved {
    pub success: bool,
    pub message: &'static str,
}

/// Draft endpoint errors carry `success: false` in their envelope.
#[derive(Debug)]
pub struct DraftError(pub ApiError);

impl From<ApiError> for DraftError {
    fn from(e: ApiError) -> Self {
        DraftError(e)
    }
}

impl IntoResponse for DraftError {
    fn into_response(self) -> Response {
        self.0.into_response_with(Some(false))
    }
}

/// Save an unscored draft. Every call inserts a new row.
pub async fn save_draft(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    payload: Result<Json<DraftRequest>, JsonRejection>,
) -> Result<Json<DraftSaved>, DraftError> {
    let req = payload.map(|Json(req)| req).unwrap_or_else(|rejection| {
        debug!(%rejection, "unreadable draft request body");
        DraftRequest::default()
    });

    let text = validate_draft(req.redacao.as_deref()).map_err(ApiError::from)?;

    let essay_id = state
        .store
        .insert(&NewEssay::draft(user_id, text))
        .await
        .map_err(|e| ApiError::internal("Erro interno ao salvar rascunho.", e))?;

    info!(essay_id, user_id, "draft saved");

    Ok(Json(DraftSaved {
        success: true,
        message: "Rascunho salvo com sucesso.",
    }))
}
