use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::scoring::ScoringResult;
use super::user::UserId;

pub type EssayId = u64;

/// Topic stored when a scored essay is submitted without one.
pub const DEFAULT_TOPIC: &str = "Tema: Redação Corrigida";

/// Topic every draft is stored under.
pub const DRAFT_TOPIC: &str = "Rascunho Salvo";

/// A persisted essay, scored or draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EssayRecord {
    #[serde(rename = "redacao_id")]
    pub id: EssayId,
    #[serde(rename = "usuario_id")]
    pub user_id: UserId,
    #[serde(rename = "tema")]
    pub topic: String,
    #[serde(rename = "texto_original")]
    pub original_text: String,
    #[serde(flatten)]
    pub scores: ScoringResult,
    #[serde(rename = "data_submissao")]
    pub submitted_at: jiff::Timestamp,
}

impl EssayRecord {
    pub fn is_draft(&self) -> bool {
        self.scores.is_draft()
    }
}

/// An essay about to be inserted. The store assigns id and timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEssay {
    pub user_id: UserId,
    pub topic: String,
    pub original_text: String,
    pub scores: ScoringResult,
}

impl NewEssay {
    /// A scored essay. An absent or empty topic falls back to [`DEFAULT_TOPIC`].
    pub fn scored(
        user_id: UserId,
        topic: Option<&str>,
        original_text: impl Into<String>,
        scores: ScoringResult,
    ) -> Self {
        let topic = topic
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_TOPIC)
            .to_string();
        Self {
            user_id,
            topic,
            original_text: original_text.into(),
            scores,
        }
    }

    pub fn draft(user_id: UserId, original_text: impl Into<String>) -> Self {
        Self {
            user_id,
            topic: DRAFT_TOPIC.to_string(),
            original_text: original_text.into(),
            scores: ScoringResult::draft(),
        }
    }
}

/// A scored essay as listed in the history view.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredEssayRow {
    pub id: EssayId,
    pub topic: String,
    pub final_score: i32,
    pub submitted_at: jiff::Timestamp,
}

/// A draft as listed in the dashboard. `preview` is already cut to
/// [`PREVIEW_CHARS`](super::dashboard::PREVIEW_CHARS) characters.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftRow {
    pub id: EssayId,
    pub preview: String,
    pub submitted_at: jiff::Timestamp,
}
