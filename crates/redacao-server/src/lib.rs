//! redacao-server
//!
//! HTTP API for essay scoring: submit for grading, save drafts, read the
//! dashboard and fetch single essays.

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use state::AppState;

/// Build the application router over the given state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/api/corrigir-redacao", post(routes::scoring::score_essay))
        .route("/api/salvar-rascunho", post(routes::drafts::save_draft))
        .route(
            "/api/dashboard-data/{usuario_id}",
            get(routes::dashboard::dashboard_data),
        )
        .route("/api/redacao/{id}", get(routes::essays::get_essay))
        .layer(
            ServiceBuilder::new()
                .layer(cors)
                .layer(axum_mw::from_fn(middleware::audit::audit_log)),
        )
        .with_state(state)
}
