use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use redacao_core::models::user::UserId;

use crate::state::AppState;

/// The user a request acts on behalf of.
///
/// There is no authentication: every request resolves to the identity
/// configured in [`AppState::identity`]. Handlers take this extractor so
/// the source of identity is in one place.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurrentUser(pub UserId);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(CurrentUser(state.identity))
    }
}
