//! MySQL-backed [`EssayStore`].
//!
//! Every statement binds its inputs; user text is never spliced into SQL.
//! Timestamps travel as Unix seconds so the session time zone is applied
//! symmetrically on write (`CURRENT_TIMESTAMP`) and read (`UNIX_TIMESTAMP`).

use sqlx::{FromRow, MySqlPool};
use tracing::debug;

use redacao_core::models::dashboard::{PREVIEW_CHARS, ScoreAverages};
use redacao_core::models::essay::{DraftRow, EssayId, EssayRecord, NewEssay, ScoredEssayRow};
use redacao_core::models::scoring::ScoringResult;
use redacao_core::models::user::UserId;

use crate::error::StorageError;
use crate::store::{BoxFuture, EssayStore};

const INSERT_ESSAY: &str = "\
INSERT INTO REDACOES
    (usuario_id, tema, texto_original, nota_final, c1_score, c2_score, c3_score, c4_score, c5_score, feedback_detalhado)
VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)";

const SCORE_AVERAGES: &str = "\
SELECT
    COUNT(*) AS scored_count,
    CAST(IFNULL(AVG(nota_final), 0) AS DOUBLE) AS final_avg,
    CAST(IFNULL(AVG(c1_score), 0) AS DOUBLE) AS c1_avg,
    CAST(IFNULL(AVG(c2_score), 0) AS DOUBLE) AS c2_avg,
    CAST(IFNULL(AVG(c3_score), 0) AS DOUBLE) AS c3_avg,
    CAST(IFNULL(AVG(c4_score), 0) AS DOUBLE) AS c4_avg,
    CAST(IFNULL(AVG(c5_score), 0) AS DOUBLE) AS c5_avg
FROM REDACOES WHERE usuario_id = ? AND nota_final > 0";

const SCORED_HISTORY: &str = "\
SELECT
    redacao_id, tema, nota_final,
    CAST(UNIX_TIMESTAMP(data_submissao) AS SIGNED) AS submitted_at
FROM REDACOES WHERE usuario_id = ? AND nota_final > 0
ORDER BY data_submissao DESC, redacao_id DESC";

const DRAFTS: &str = "\
SELECT
    redacao_id, LEFT(texto_original, ?) AS preview,
    CAST(UNIX_TIMESTAMP(data_submissao) AS SIGNED) AS submitted_at
FROM REDACOES WHERE usuario_id = ? AND nota_final = 0
ORDER BY data_submissao DESC, redacao_id DESC";

const FIND_ESSAY: &str = "\
SELECT
    redacao_id, usuario_id, tema, texto_original, nota_final,
    c1_score, c2_score, c3_score, c4_score, c5_score, feedback_detalhado,
    CAST(UNIX_TIMESTAMP(data_submissao) AS SIGNED) AS submitted_at
FROM REDACOES WHERE redacao_id = ?";

#[derive(Clone)]
pub struct MySqlEssayStore {
    pool: MySqlPool,
}

impl MySqlEssayStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct AveragesRow {
    scored_count: i64,
    final_avg: f64,
    c1_avg: f64,
    c2_avg: f64,
    c3_avg: f64,
    c4_avg: f64,
    c5_avg: f64,
}

#[derive(FromRow)]
struct HistoryRow {
    redacao_id: u64,
    tema: String,
    nota_final: i32,
    submitted_at: i64,
}

#[derive(FromRow)]
struct PreviewRow {
    redacao_id: u64,
    preview: String,
    submitted_at: i64,
}

#[derive(FromRow)]
struct EssayRow {
    redacao_id: u64,
    usuario_id: u32,
    tema: String,
    texto_original: String,
    nota_final: i32,
    c1_score: i32,
    c2_score: i32,
    c3_score: i32,
    c4_score: i32,
    c5_score: i32,
    feedback_detalhado: String,
    submitted_at: i64,
}

fn timestamp(seconds: i64) -> Result<jiff::Timestamp, StorageError> {
    jiff::Timestamp::from_second(seconds)
        .map_err(|e| StorageError::InvalidValue(format!("data_submissao {seconds}: {e}")))
}

impl TryFrom<EssayRow> for EssayRecord {
    type Error = StorageError;

    fn try_from(row: EssayRow) -> Result<Self, Self::Error> {
        Ok(EssayRecord {
            id: row.redacao_id,
            user_id: row.usuario_id,
            topic: row.tema,
            original_text: row.texto_original,
            scores: ScoringResult {
                final_score: row.nota_final,
                c1: row.c1_score,
                c2: row.c2_score,
                c3: row.c3_score,
                c4: row.c4_score,
                c5: row.c5_score,
                feedback: row.feedback_detalhado,
            },
            submitted_at: timestamp(row.submitted_at)?,
        })
    }
}

impl EssayStore for MySqlEssayStore {
    fn insert<'a>(&'a self, essay: &'a NewEssay) -> BoxFuture<'a, Result<EssayId, StorageError>> {
        Box::pin(async move {
            let scores = &essay.scores;
            let result = sqlx::query(INSERT_ESSAY)
                .bind(essay.user_id)
                .bind(&essay.topic)
                .bind(&essay.original_text)
                .bind(scores.final_score)
                .bind(scores.c1)
                .bind(scores.c2)
                .bind(scores.c3)
                .bind(scores.c4)
                .bind(scores.c5)
                .bind(&scores.feedback)
                .execute(&self.pool)
                .await
                .map_err(|e| StorageError::Insert(e.to_string()))?;

            let id = result.last_insert_id();
            debug!(essay_id = id, user_id = essay.user_id, "essay inserted");
            Ok(id)
        })
    }

    fn score_averages(&self, user_id: UserId) -> BoxFuture<'_, Result<ScoreAverages, StorageError>> {
        Box::pin(async move {
            let row: AveragesRow = sqlx::query_as(SCORE_AVERAGES)
                .bind(user_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| StorageError::Query(e.to_string()))?;

            let scored_count = u64::try_from(row.scored_count)
                .map_err(|e| StorageError::InvalidValue(format!("scored_count: {e}")))?;

            Ok(ScoreAverages {
                scored_count,
                final_score: row.final_avg,
                c1: row.c1_avg,
                c2: row.c2_avg,
                c3: row.c3_avg,
                c4: row.c4_avg,
                c5: row.c5_avg,
            })
        })
    }

    fn scored_history(
        &self,
        user_id: UserId,
    ) -> BoxFuture<'_, Result<Vec<ScoredEssayRow>, StorageError>> {
        Box::pin(async move {
            let rows: Vec<HistoryRow> = sqlx::query_as(SCORED_HISTORY)
                .bind(user_id)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| StorageError::Query(e.to_string()))?;

            rows.into_iter()
                .map(|row| {
                    Ok(ScoredEssayRow {
                        id: row.redacao_id,
                        topic: row.tema,
                        final_score: row.nota_final,
                        submitted_at: timestamp(row.submitted_at)?,
                    })
                })
                .collect::<Result<Vec<_>, _>>()
        })
    }

    fn drafts(&self, user_id: UserId) -> BoxFuture<'_, Result<Vec<DraftRow>, StorageError>> {
        Box::pin(async move {
            let rows: Vec<PreviewRow> = sqlx::query_as(DRAFTS)
                .bind(PREVIEW_CHARS as u32)
                .bind(user_id)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| StorageError::Query(e.to_string()))?;

            rows.into_iter()
                .map(|row| {
                    Ok(DraftRow {
                        id: row.redacao_id,
                        preview: row.preview,
                        submitted_at: timestamp(row.submitted_at)?,
                    })
                })
                .collect::<Result<Vec<_>, _>>()
        })
    }

    fn find(&self, id: EssayId) -> BoxFuture<'_, Result<Option<EssayRecord>, StorageError>> {
        Box::pin(async move {
            let row: Option<EssayRow> = sqlx::query_as(FIND_ESSAY)
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| StorageError::Query(e.to_string()))?;

            row.map(EssayRecord::try_from).transpose()
        })
    }
}
