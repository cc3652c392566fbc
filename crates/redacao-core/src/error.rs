use thiserror::Error;

/// Caller input that fails a precondition.
///
/// The display strings are the messages returned to API clients.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("O texto da redação é muito curto.")]
    EssayTooShort { min: usize, actual: usize },

    #[error("O rascunho está vazio.")]
    EmptyDraft,
}
