use crate::error::CoreError;

/// Minimum number of characters an essay needs before it is sent for scoring.
pub const MIN_ESSAY_CHARS: usize = 50;

/// Check that an essay is long enough to be scored.
///
/// Length is counted in characters, not bytes, so accented Portuguese text
/// is measured the way a reader would count it.
pub fn validate_essay(text: Option<&str>) -> Result<&str, CoreError> {
    let text = text.unwrap_or_default();
    let actual = text.chars().count();
    if actual < MIN_ESSAY_CHARS {
        return Err(CoreError::EssayTooShort {
            min: MIN_ESSAY_CHARS,
            actual,
        });
    }
    Ok(text)
}

/// Check that a draft has some non-whitespace content.
///
/// The returned text is the original, untrimmed draft.
pub fn validate_draft(text: Option<&str>) -> Result<&str, CoreError> {
    match text {
        Some(t) if !t.trim().is_empty() => Ok(t),
        _ => Err(CoreError::EmptyDraft),
    }
}
