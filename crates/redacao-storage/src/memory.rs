//! In-process [`EssayStore`] with the same semantics as the MySQL store.
//! Used by the HTTP tests and handy for local experiments.

use std::cmp::Reverse;

use tokio::sync::Mutex;

use redacao_core::models::dashboard::{ScoreAverages, preview};
use redacao_core::models::essay::{DraftRow, EssayId, EssayRecord, NewEssay, ScoredEssayRow};
use redacao_core::models::user::UserId;

use crate::error::StorageError;
use crate::store::{BoxFuture, EssayStore};

#[derive(Default)]
pub struct MemoryEssayStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    last_id: EssayId,
    essays: Vec<EssayRecord>,
}

impl MemoryEssayStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored record, in insertion order.
    pub async fn records(&self) -> Vec<EssayRecord> {
        self.inner.lock().await.essays.clone()
    }

    /// Insert a fully formed record, keeping its id and timestamp.
    pub async fn insert_record(&self, record: EssayRecord) {
        let mut inner = self.inner.lock().await;
        inner.last_id = inner.last_id.max(record.id);
        inner.essays.push(record);
    }
}

/// The user's records matching `keep`, newest first.
fn newest_first<'a>(
    essays: &'a [EssayRecord],
    user_id: UserId,
    keep: impl Fn(&EssayRecord) -> bool,
) -> Vec<&'a EssayRecord> {
    let mut selected: Vec<_> = essays
        .iter()
        .filter(|e| e.user_id == user_id && keep(e))
        .collect();
    selected.sort_by_key(|e| Reverse((e.submitted_at, e.id)));
    selected
}

fn mean(values: impl Iterator<Item = i32>, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    values.map(f64::from).sum::<f64>() / count as f64
}

impl EssayStore for MemoryEssayStore {
    fn insert<'a>(&'a self, essay: &'a NewEssay) -> BoxFuture<'a, Result<EssayId, StorageError>> {
        Box::pin(async move {
            let mut inner = self.inner.lock().await;
            inner.last_id += 1;
            let id = inner.last_id;
            inner.essays.push(EssayRecord {
                id,
                user_id: essay.user_id,
                topic: essay.topic.clone(),
                original_text: essay.original_text.clone(),
                scores: essay.scores.clone(),
                submitted_at: jiff::Timestamp::now(),
            });
            Ok(id)
        })
    }

    fn score_averages(&self, user_id: UserId) -> BoxFuture<'_, Result<ScoreAverages, StorageError>> {
        Box::pin(async move {
            let inner = self.inner.lock().await;
            let scored = newest_first(&inner.essays, user_id, |e| e.scores.final_score > 0);
            let n = scored.len();
            let avg = |f: fn(&EssayRecord) -> i32| mean(scored.iter().map(|e| f(e)), n);

            Ok(ScoreAverages {
                scored_count: n as u64,
                final_score: avg(|e| e.scores.final_score),
                c1: avg(|e| e.scores.c1),
                c2: avg(|e| e.scores.c2),
                c3: avg(|e| e.scores.c3),
                c4: avg(|e| e.scores.c4),
                c5: avg(|e| e.scores.c5),
            })
        })
    }

    fn scored_history(
        &self,
        user_id: UserId,
    ) -> BoxFuture<'_, Result<Vec<ScoredEssayRow>, StorageError>> {
        Box::pin(async move {
            let inner = self.inner.lock().await;
            Ok(
                newest_first(&inner.essays, user_id, |e| e.scores.final_score > 0)
                    .into_iter()
                    .map(|e| ScoredEssayRow {
                        id: e.id,
                        topic: e.topic.clone(),
                        final_score: e.scores.final_score,
                        submitted_at: e.submitted_at,
                    })
                    .collect(),
            )
        })
    }

    fn drafts(&self, user_id: UserId) -> BoxFuture<'_, Result<Vec<DraftRow>, StorageError>> {
        Box::pin(async move {
            let inner = self.inner.lock().await;
            Ok(
                newest_first(&inner.essays, user_id, |e| e.scores.final_score == 0)
                    .into_iter()
                    .map(|e| DraftRow {
                        id: e.id,
                        preview: preview(&e.original_text),
                        submitted_at: e.submitted_at,
                    })
                    .collect(),
            )
        })
    }

    fn find(&self, id: EssayId) -> BoxFuture<'_, Result<Option<EssayRecord>, StorageError>> {
        Box::pin(async move {
            let inner = self.inner.lock().await;
            Ok(inner.essays.iter().find(|e| e.id == id).cloned())
        })
    }
}
