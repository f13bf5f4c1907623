//! Model-fallback orchestration for one product search.
//!
//! Candidates are tried strictly in priority order, at most once each, with
//! no backoff: a later model is only meaningful after the former failed.
//! The first success short-circuits; only after every candidate failed is
//! the last error classified for the user.

use regex::Regex;
use serde_json::Value;

use shopwise_core::{AnalysisRequest, AnalysisResult, Config, SearchError};

use crate::backend::GenerationBackend;
use crate::client::GeminiClient;
use crate::error::LlmError;
use crate::prompt;
use crate::wire::GenerateContentRequest;

/// Shown instead of an empty model reply.
pub const EMPTY_REPLY_PLACEHOLDER: &str = "無法產生詳細分析報告。";

const FALLBACK_FAILURE_MESSAGE: &str = "無法獲取產品數據";

pub struct ProductSearcher {
    /// `None` when no credential is configured; surfaced as a
    /// `Configuration` error on the first search, never at construction.
    backend: Option<Box<dyn GenerationBackend>>,
    models: Vec<String>,
}

impl ProductSearcher {
    pub fn new(backend: Box<dyn GenerationBackend>, models: Vec<String>) -> Self {
        Self {
            backend: Some(backend),
            models,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let backend = config
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .map(|key| {
                Box::new(GeminiClient::new(key).with_base_url(config.api_base()))
                    as Box<dyn GenerationBackend>
            });

        Self {
            backend,
            models: config.models.clone(),
        }
    }

    pub fn models(&self) -> &[String] {
        &self.models
    }

    /// Run one search: validate locally, then try each model candidate in
    /// order until one succeeds.
    pub async fn search(&self, request: &AnalysisRequest) -> Result<AnalysisResult, SearchError> {
        if request.is_empty() {
            return Err(SearchError::InvalidRequest);
        }

        let backend = self.backend.as_deref().ok_or_else(SearchError::missing_key)?;

        let wire_request = GenerateContentRequest::grounded(prompt::build_parts(request));
        let mut last_error: Option<LlmError> = None;

        for model in &self.models {
            log::info!("正在嘗試使用模型搜尋: {}", model);

            match backend.generate(model, &wire_request).await {
                Ok(response) => {
                    let text = response.text();
                    let raw_text = if text.trim().is_empty() {
                        EMPTY_REPLY_PLACEHOLDER.to_string()
                    } else {
                        text
                    };

                    return Ok(AnalysisResult {
                        raw_text,
                        sources: response.citations(),
                    });
                }
                Err(err) => {
                    log::warn!("模型 {} 請求失敗: {}", model, err);
                    last_error = Some(err);
                }
            }
        }

        Err(classify_failure(last_error))
    }
}

/// Classify the terminal error after every candidate failed.
fn classify_failure(last_error: Option<LlmError>) -> SearchError {
    let message = match &last_error {
        Some(err) => resolve_message(&err.to_string()),
        None => FALLBACK_FAILURE_MESSAGE.to_string(),
    };

    if message.to_lowercase().contains("quota") || message.contains("429") {
        return SearchError::quota_exceeded();
    }

    SearchError::RequestFailed(message)
}

/// Prefer the `error.message` of a JSON object embedded in the raw error
/// text; fall back to the raw text itself.
fn resolve_message(raw: &str) -> String {
    if let Ok(pattern) = Regex::new(r"(?s)\{.*\}") {
        if let Some(found) = pattern.find(raw) {
            if let Ok(body) = serde_json::from_str::<Value>(found.as_str()) {
                if let Some(message) = body
                    .get("error")
                    .and_then(|e| e.get("message"))
                    .and_then(Value::as_str)
                {
                    return message.to_string();
                }
            }
        }
    }
    raw.to_string()
}
