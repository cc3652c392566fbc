mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;

use common::{BrokenStore, StubModel, VERDICT, app, essay_of, get, memory_store, post_json, send};

#[tokio::test]
async fn unknown_ids_are_not_found() {
    let app = app(memory_store(), StubModel::replying(VERDICT));

    for uri in ["/api/redacao/42", "/api/redacao/abc", "/api/redacao/-1"] {
        let (status, body) = send(&app, get(uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body, json!({ "error": "Redação ou rascunho não encontrado." }));
    }
}

#[tokio::test]
async fn scored_essay_is_returned_with_every_field() {
    let store = memory_store();
    let app = app(store.clone(), StubModel::replying(VERDICT));
    let text = essay_of(200);
    send(
        &app,
        post_json(
            "/api/corrigir-redacao",
            json!({ "redacao": text, "tema": "Violência urbana" }),
        ),
    )
    .await;
    let id = store.records().await[0].id;

    let (status, body) = send(&app, get(&format!("/api/redacao/{id}"))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["redacao_id"], id);
    assert_eq!(body["usuario_id"], 1);
    assert_eq!(body["tema"], "Violência urbana");
    assert_eq!(body["texto_original"], text);
    assert_eq!(body["nota_final"], 720);
    assert_eq!(body["c1_score"], 160);
    assert_eq!(body["c2_score"], 160);
    assert_eq!(body["c3_score"], 120);
    assert_eq!(body["c4_score"], 160);
    assert_eq!(body["c5_score"], 120);
    assert!(body["feedback_detalhado"].as_str().unwrap().starts_with("Competência 1"));
    assert!(body["data_submissao"].is_string());
}

#[tokio::test]
async fn drafts_are_returned_too() {
    let store = memory_store();
    let app = app(store.clone(), StubModel::replying(VERDICT));
    send(
        &app,
        post_json("/api/salvar-rascunho", json!({ "redacao": "Rascunho incompleto" })),
    )
    .await;
    let id = store.records().await[0].id;

    let (status, body) = send(&app, get(&format!("/api/redacao/{id}"))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["nota_final"], 0);
    assert_eq!(body["texto_original"], "Rascunho incompleto");
}

#[tokio::test]
async fn storage_failure_is_a_server_error() {
    let app = app(Arc::new(BrokenStore), StubModel::replying(VERDICT));

    let (status, body) = send(&app, get("/api/redacao/1")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Erro interno ao buscar a redação." }));
}
