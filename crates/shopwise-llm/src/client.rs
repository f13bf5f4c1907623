//! HTTP client for the Gemini `generateContent` endpoint.

use async_trait::async_trait;
use reqwest::Client;

use crate::backend::GenerationBackend;
use crate::error::{LlmError, Result};
use crate::wire::{GenerateContentRequest, GenerateContentResponse};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Set a custom base URL (e.g., for proxies or alternative endpoints).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    fn request_url(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, model, self.api_key
        )
    }
}

#[async_trait]
impl GenerationBackend for GeminiClient {
    async fn generate(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let url = self.request_url(model);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(LlmError::Http)?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.map_err(LlmError::Http)?;

            if status == 401 || status == 403 {
                return Err(LlmError::Auth(format!(
                    "Gemini authentication failed: {}. Please check your API key.",
                    text
                )));
            }

            // Keep status and body verbatim: the terminal-error classifier
            // pattern-matches the embedded JSON message.
            return Err(LlmError::Api(format!(
                "Gemini API error: HTTP {}: {}",
                status, text
            )));
        }

        let parsed = response
            .json::<GenerateContentResponse>()
            .await
            .map_err(LlmError::Http)?;

        log::debug!(
            "Gemini generateContent succeeded: model={}, candidates={}",
            model,
            parsed.candidates.len()
        );

        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_client() {
        let client = GeminiClient::new("test_key");
        assert_eq!(client.api_key, "test_key");
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_with_base_url() {
        let client = GeminiClient::new("test_key").with_base_url("https://custom.api.com/v1beta");
        assert_eq!(client.base_url, "https://custom.api.com/v1beta");
    }

    #[test]
    fn test_url_construction() {
        let client =
            GeminiClient::new("my_api_key_123").with_base_url("https://test.api.com/v1beta");

        assert_eq!(
            client.request_url("gemini-2.0-flash-exp"),
            "https://test.api.com/v1beta/models/gemini-2.0-flash-exp:generateContent?key=my_api_key_123"
        );
    }
}
