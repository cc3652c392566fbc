use std::sync::Arc;

use jiff::tz::TimeZone;

use redacao_core::models::user::UserId;
use redacao_gemini::model::GenerativeModel;
use redacao_storage::store::EssayStore;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EssayStore>,
    pub model: Arc<dyn GenerativeModel>,
    /// Identity every request is attributed to.
    pub identity: UserId,
    /// Zone dashboard dates are rendered in.
    pub time_zone: TimeZone,
}

impl AppState {
    pub fn new(
        store: Arc<dyn EssayStore>,
        model: Arc<dyn GenerativeModel>,
        identity: UserId,
    ) -> Self {
        Self {
            store,
            model,
            identity,
            time_zone: TimeZone::system(),
        }
    }

    pub fn with_time_zone(mut self, time_zone: TimeZone) -> Self {
        self.time_zone = time_zone;
        self
    }
}
