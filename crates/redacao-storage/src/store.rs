use std::future::Future;
use std::pin::Pin;

use redacao_core::models::dashboard::ScoreAverages;
use redacao_core::models::essay::{DraftRow, EssayId, EssayRecord, NewEssay, ScoredEssayRow};
use redacao_core::models::user::UserId;

use crate::error::StorageError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Everything the API needs from durable storage.
///
/// Records are only ever inserted; nothing here updates or deletes.
/// Listing methods return newest first, ties broken by descending id.
pub trait EssayStore: Send + Sync {
    /// Insert an essay and return its new id.
    fn insert<'a>(&'a self, essay: &'a NewEssay) -> BoxFuture<'a, Result<EssayId, StorageError>>;

    /// Count and averages over the user's scored essays (`final_score > 0`).
    fn score_averages(&self, user_id: UserId) -> BoxFuture<'_, Result<ScoreAverages, StorageError>>;

    /// The user's scored essays.
    fn scored_history(
        &self,
        user_id: UserId,
    ) -> BoxFuture<'_, Result<Vec<ScoredEssayRow>, StorageError>>;

    /// The user's drafts (`final_score == 0`), previews already truncated.
    fn drafts(&self, user_id: UserId) -> BoxFuture<'_, Result<Vec<DraftRow>, StorageError>>;

    /// Fetch one record by id, regardless of owner.
    fn find(&self, id: EssayId) -> BoxFuture<'_, Result<Option<EssayRecord>, StorageError>>;
}
