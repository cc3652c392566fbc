use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use redacao_core::models::user::TestUser;
use redacao_gemini::client::GeminiClient;
use redacao_server::config::Config;
use redacao_server::state::AppState;
use redacao_storage::client::{connect, migrate, seed_test_user};
use redacao_storage::mysql::MySqlEssayStore;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // A missing .env is fine; real deployments set the variables directly.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = Config::from_env()?;

    let model = GeminiClient::new(&config.gemini_api_key, &config.gemini_model)?
        .with_base_url(&config.gemini_base_url);

    let pool = connect(&config.db).await?;
    migrate(&pool).await?;
    seed_test_user(&pool, &TestUser::new(config.test_user_id)).await?;

    let state = AppState::new(
        Arc::new(MySqlEssayStore::new(pool)),
        Arc::new(model),
        config.test_user_id,
    )
    .with_time_zone(config.display_time_zone.clone());
    let app = redacao_server::router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        model = %config.gemini_model,
        time_zone = config.display_time_zone.iana_name().unwrap_or("unnamed"),
        "essay scoring server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutting down");
}
