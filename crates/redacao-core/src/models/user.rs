use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub type UserId = u32;

/// The single pre-seeded identity every request is attributed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TestUser {
    #[serde(rename = "usuario_id")]
    pub id: UserId,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
}

impl TestUser {
    pub const DEFAULT_ID: UserId = 1;

    pub fn new(id: UserId) -> Self {
        Self {
            id,
            name: "Aluno Teste".to_string(),
            email: "aluno@app.com".to_string(),
        }
    }
}

impl Default for TestUser {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ID)
    }
}
