use thiserror::Error;

use redacao_core::models::user::UserId;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database connection failed: {0}")]
    Connect(String),

    #[error("migration failed: {0}")]
    Migrate(String),

    #[error("insert failed: {0}")]
    Insert(String),

    #[error("query failed: {0}")]
    Query(String),

    #[error("test user {user_id} is missing after seeding (is {email} taken by another user?)")]
    Seed { user_id: UserId, email: String },

    #[error("invalid column value: {0}")]
    InvalidValue(String),
}
