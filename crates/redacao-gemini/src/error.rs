use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("model invocation failed: {0}")]
    Invocation(String),

    #[error("Gemini API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("response did not conform to expected schema: {0}")]
    SchemaViolation(String),

    #[error("Gemini config error: {0}")]
    Config(String),
}
