use redacao_core::error::CoreError;
use redacao_core::validation::{MIN_ESSAY_CHARS, validate_draft, validate_essay};

#[test]
fn missing_essay_is_too_short() {
    assert_eq!(
        validate_essay(None),
        Err(CoreError::EssayTooShort { min: 50, actual: 0 })
    );
}

#[test]
fn essay_one_char_below_minimum_is_rejected() {
    let text = "a".repeat(MIN_ESSAY_CHARS - 1);
    assert!(validate_essay(Some(&text)).is_err());
}

#[test]
fn essay_at_minimum_is_accepted() {
    let text = "a".repeat(MIN_ESSAY_CHARS);
    assert_eq!(validate_essay(Some(&text)), Ok(text.as_str()));
}

#[test]
fn essay_length_counts_characters_not_bytes() {
    // 49 two-byte characters: 98 bytes but still too short.
    let text = "ç".repeat(MIN_ESSAY_CHARS - 1);
    assert_eq!(
        validate_essay(Some(&text)),
        Err(CoreError::EssayTooShort {
            min: MIN_ESSAY_CHARS,
            actual: MIN_ESSAY_CHARS - 1
        })
    );
}

#[test]
fn blank_drafts_are_rejected() {
    assert_eq!(validate_draft(None), Err(CoreError::EmptyDraft));
    assert_eq!(validate_draft(Some("")), Err(CoreError::EmptyDraft));
    assert_eq!(validate_draft(Some("  \n\t ")), Err(CoreError::EmptyDraft));
}

#[test]
fn draft_text_is_kept_untrimmed() {
    assert_eq!(validate_draft(Some("  ideia  ")), Ok("  ideia  "));
}

#[test]
fn error_messages_are_client_facing() {
    assert_eq!(
        CoreError::EssayTooShort { min: 50, actual: 3 }.to_string(),
        "O texto da redação é muito curto."
    );
    assert_eq!(CoreError::EmptyDraft.to_string(), "O rascunho está vazio.");
}
