use axum::Json;
use axum::extract::{Path, State};

use redacao_core::models::essay::{EssayId, EssayRecord};

use crate::error::ApiError;
use crate::state::AppState;

const NOT_FOUND: &str = "Redação ou rascunho não encontrado.";

/// Fetch one essay or draft by id. Ownership is not checked.
pub async fn get_essay(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EssayRecord>, ApiError> {
    // An id that is not a number cannot match any row.
    let id: EssayId = id
        .parse()
        .map_err(|_| ApiError::NotFound(NOT_FOUND.to_string()))?;

    state
        .store
        .find(id)
        .await
        .map_err(|e| ApiError::internal("Erro interno ao buscar a redação.", e))?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(NOT_FOUND.to_string()))
}
