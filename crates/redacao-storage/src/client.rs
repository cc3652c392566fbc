use std::fmt;

use sqlx::MySqlPool;
use sqlx::migrate::Migrator;
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use tracing::info;

use redacao_core::models::user::TestUser;

use crate::error::StorageError;

pub static MIGRATOR: Migrator = sqlx::migrate!();

/// Connection settings for the MySQL server.
#[derive(Clone)]
pub struct DbSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub max_connections: u32,
}

impl fmt::Debug for DbSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

/// Build the pool and open a first connection, so an unreachable server
/// fails here rather than on the first request.
pub async fn connect(settings: &DbSettings) -> Result<MySqlPool, StorageError> {
    let options = MySqlConnectOptions::new()
        .host(&settings.host)
        .port(settings.port)
        .username(&settings.user)
        .password(&settings.password)
        .database(&settings.database);

    let pool = MySqlPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect_with(options)
        .await
        .map_err(|e| StorageError::Connect(e.to_string()))?;

    info!(
        host = %settings.host,
        port = settings.port,
        database = %settings.database,
        "connected to MySQL"
    );

    Ok(pool)
}

/// Create the `USUARIOS` and `REDACOES` tables if they are missing.
pub async fn migrate(pool: &MySqlPool) -> Result<(), StorageError> {
    MIGRATOR
        .run(pool)
        .await
        .map_err(|e| StorageError::Migrate(e.to_string()))
}

/// Make sure the fixed test identity exists. Safe to run on every start.
///
/// `INSERT IGNORE` also skips a clash on the unique email, so the row is
/// looked up afterwards.
pub async fn seed_test_user(pool: &MySqlPool, user: &TestUser) -> Result<(), StorageError> {
    sqlx::query("INSERT IGNORE INTO USUARIOS (usuario_id, nome, email) VALUES (?, ?, ?)")
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .execute(pool)
        .await
        .map_err(|e| StorageError::Insert(e.to_string()))?;

    let found: Option<i64> = sqlx::query_scalar("SELECT 1 FROM USUARIOS WHERE usuario_id = ?")
        .bind(user.id)
        .fetch_optional(pool)
        .await
        .map_err(|e| StorageError::Query(e.to_string()))?;

    if found.is_none() {
        return Err(StorageError::Seed {
            user_id: user.id,
            email: user.email.clone(),
        });
    }

    info!(user_id = user.id, "test user ready");
    Ok(())
}
