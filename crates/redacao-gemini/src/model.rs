use std::future::Future;
use std::pin::Pin;

use crate::api::GenerateContentRequest;
use crate::client::GeminiClient;
use crate::error::GeminiError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A generative model that can be asked for JSON matching a schema.
///
/// The model is a black box: it receives a prompt plus a response schema
/// and returns the raw JSON text it produced. Parsing is the caller's job.
pub trait GenerativeModel: Send + Sync {
    fn generate_json<'a>(
        &'a self,
        prompt: &'a str,
        schema: &'a serde_json::Value,
    ) -> BoxFuture<'a, Result<String, GeminiError>>;
}

impl GenerativeModel for GeminiClient {
    fn generate_json<'a>(
        &'a self,
        prompt: &'a str,
        schema: &'a serde_json::Value,
    ) -> BoxFuture<'a, Result<String, GeminiError>> {
        Box::pin(async move {
            let request = GenerateContentRequest::json_prompt(prompt, schema);
            let response = self.generate_content(&request).await?;
            response
                .text()
                .ok_or_else(|| GeminiError::ResponseParse(response.empty_reason()))
        })
    }
}
