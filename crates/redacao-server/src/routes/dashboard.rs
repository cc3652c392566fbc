use axum::Json;
use axum::extract::{Path, State};
use tracing::debug;

use redacao_core::models::dashboard::Dashboard;

use crate::error::ApiError;
use crate::middleware::identity::CurrentUser;
use crate::state::AppState;

const LOAD_FAILED: &str = "Erro ao carregar dados do dashboard.";

/// Summary, scored history and drafts for the current user.
///
/// The user id in the path is accepted for URL compatibility but not used:
/// data always belongs to [`CurrentUser`].
pub async fn dashboard_data(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(requested): Path<String>,
) -> Result<Json<Dashboard>, ApiError> {
    if requested != user_id.to_string() {
        debug!(requested = %requested, user_id, "ignoring dashboard path user id");
    }

    let (averages, scored, drafts) = tokio::try_join!(
        state.store.score_averages(user_id),
        state.store.scored_history(user_id),
        state.store.drafts(user_id),
    )
    .map_err(|e| ApiError::internal(LOAD_FAILED, e))?;

    Ok(Json(Dashboard::assemble(
        averages,
        scored,
        drafts,
        &state.time_zone,
    )))
}
