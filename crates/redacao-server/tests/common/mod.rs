#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use jiff::tz::TimeZone;
use serde_json::Value;
use tower::ServiceExt;

use redacao_core::models::dashboard::ScoreAverages;
use redacao_core::models::essay::{DraftRow, EssayId, EssayRecord, NewEssay, ScoredEssayRow};
use redacao_core::models::user::UserId;
use redacao_gemini::error::GeminiError;
use redacao_gemini::model::{BoxFuture, GenerativeModel};
use redacao_server::state::AppState;
use redacao_storage::error::StorageError;
use redacao_storage::memory::MemoryEssayStore;
use redacao_storage::store::EssayStore;

pub const USER_ID: UserId = 1;

pub const VERDICT: &str = r#"{
    "nota_final": 720,
    "c1_score": 160,
    "c2_score": 160,
    "c3_score": 120,
    "c4_score": 160,
    "c5_score": 120,
    "feedback_detalhado": "Competência 1: bom domínio.\nCompetência 5: proposta incompleta."
}"#;

/// Model double that answers every prompt with the same reply.
pub struct StubModel {
    reply: Result<String, String>,
    calls: AtomicUsize,
}

impl StubModel {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(message.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl GenerativeModel for StubModel {
    fn generate_json<'a>(
        &'a self,
        _prompt: &'a str,
        _schema: &'a Value,
    ) -> BoxFuture<'a, Result<String, GeminiError>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let reply = self.reply.clone().map_err(GeminiError::Invocation);
        Box::pin(async move { reply })
    }
}

/// Store double whose every operation fails.
pub struct BrokenStore;

impl EssayStore for BrokenStore {
    fn insert<'a>(&'a self, _essay: &'a NewEssay) -> BoxFuture<'a, Result<EssayId, StorageError>> {
        Box::pin(async { Err(StorageError::Insert("connection reset".to_string())) })
    }

    fn score_averages(&self, _user_id: UserId) -> BoxFuture<'_, Result<ScoreAverages, StorageError>> {
        Box::pin(async { Err(StorageError::Query("connection reset".to_string())) })
    }

    fn scored_history(
        &self,
        _user_id: UserId,
    ) -> BoxFuture<'_, Result<Vec<ScoredEssayRow>, StorageError>> {
        Box::pin(async { Ok(Vec::new()) })
    }

    fn drafts(&self, _user_id: UserId) -> BoxFuture<'_, Result<Vec<DraftRow>, StorageError>> {
        Box::pin(async { Ok(Vec::new()) })
    }

    fn find(&self, _id: EssayId) -> BoxFuture<'_, Result<Option<EssayRecord>, StorageError>> {
        Box::pin(async { Err(StorageError::Query("connection reset".to_string())) })
    }
}

pub fn app(store: Arc<dyn EssayStore>, model: Arc<dyn GenerativeModel>) -> Router {
    let state = AppState::new(store, model, USER_ID).with_time_zone(TimeZone::UTC);
    redacao_server::router(state)
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

/// An essay of exactly `chars` characters.
pub fn essay_of(chars: usize) -> String {
    "Texto sobre violência urbana. "
        .chars()
        .cycle()
        .take(chars)
        .collect()
}

pub fn memory_store() -> Arc<MemoryEssayStore> {
    Arc::new(MemoryEssayStore::new())
}
