use std::sync::Mutex;

use redacao_gemini::error::GeminiError;
use redacao_gemini::model::{BoxFuture, GenerativeModel};
use redacao_gemini::scoring::score_essay;

/// Replies with a canned answer and remembers what it was asked.
struct CannedModel {
    reply: Result<String, String>,
    seen: Mutex<Vec<(String, serde_json::Value)>>,
}

impl CannedModel {
    fn ok(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_string()),
            seen: Mutex::new(Vec::new()),
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            seen: Mutex::new(Vec::new()),
        }
    }
}

impl GenerativeModel for CannedModel {
    fn generate_json<'a>(
        &'a self,
        prompt: &'a str,
        schema: &'a serde_json::Value,
    ) -> BoxFuture<'a, Result<String, GeminiError>> {
        self.seen
            .lock()
            .unwrap()
            .push((prompt.to_string(), schema.clone()));
        let reply = self.reply.clone().map_err(GeminiError::Invocation);
        Box::pin(async move { reply })
    }
}

const VERDICT: &str = r#"{"nota_final":720,"c1_score":160,"c2_score":160,"c3_score":120,"c4_score":160,"c5_score":120,"feedback_detalhado":"Bom texto."}"#;

#[tokio::test]
async fn parses_the_model_verdict() {
    let model = CannedModel::ok(VERDICT);
    let result = score_essay(&model, "Uma redação qualquer.").await.unwrap();
    assert_eq!(result.final_score, 720);
    assert_eq!(result.c3, 120);
    assert_eq!(result.feedback, "Bom texto.");

    let seen = model.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert!(seen[0].0.contains("Uma redação qualquer."));
    assert_eq!(seen[0].1["type"], "OBJECT");
}

#[tokio::test]
async fn inconsistent_totals_pass_through() {
    let model = CannedModel::ok(
        r#"{"nota_final":900,"c1_score":100,"c2_score":100,"c3_score":100,"c4_score":100,"c5_score":100,"feedback_detalhado":"x"}"#,
    );
    let result = score_essay(&model, "texto").await.unwrap();
    assert_eq!(result.final_score, 900);
    assert!(!result.is_consistent());
}

#[tokio::test]
async fn unparsable_text_is_a_schema_violation() {
    let model = CannedModel::ok("isto não é JSON");
    let err = score_essay(&model, "texto").await.unwrap_err();
    assert!(matches!(err, GeminiError::SchemaViolation(_)));
    assert!(err.to_string().contains("isto não é JSON"));
}

#[tokio::test]
async fn missing_fields_are_a_schema_violation() {
    let model = CannedModel::ok(r#"{"nota_final":720}"#);
    let err = score_essay(&model, "texto").await.unwrap_err();
    assert!(matches!(err, GeminiError::SchemaViolation(_)));
}

#[tokio::test]
async fn model_failures_are_not_retried() {
    let model = CannedModel::failing("quota exceeded");
    let err = score_essay(&model, "texto").await.unwrap_err();
    assert!(matches!(err, GeminiError::Invocation(ref m) if m == "quota exceeded"));
    assert_eq!(model.seen.lock().unwrap().len(), 1);
}
