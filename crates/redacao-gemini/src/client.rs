use tracing::{info, warn};

use crate::api::{ApiErrorEnvelope, GenerateContentRequest, GenerateContentResponse};
use crate::error::GeminiError;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// HTTP client for the Gemini `generateContent` endpoint.
///
/// No request timeout is configured: a stalled call holds its request
/// until the server or the connection gives up.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self, GeminiError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(GeminiError::Config("API key is empty".to_string()));
        }
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| GeminiError::Config(e.to_string()))?;

        Ok(Self {
            http,
            api_key,
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Point the client at another host, e.g. a proxy or a local fake.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    /// Send one `generateContent` request.
    pub async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| GeminiError::Invocation(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| GeminiError::Invocation(e.to_string()))?;

        if !status.is_success() {
            let message = match serde_json::from_slice::<ApiErrorEnvelope>(&body) {
                Ok(envelope) => envelope.error.message,
                Err(_) => String::from_utf8_lossy(&body).into_owned(),
            };
            warn!(model = %self.model, status = status.as_u16(), %message, "Gemini request failed");
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_slice(&body)
            .map_err(|e| GeminiError::ResponseParse(e.to_string()))?;

        if let Some(usage) = parsed.usage_metadata {
            info!(
                model = %self.model,
                input_tokens = usage.prompt_token_count,
                output_tokens = usage.candidates_token_count,
                total_tokens = usage.total_token_count,
                "Gemini token usage"
            );
        }

        Ok(parsed)
    }
}
