//! Gemini `generateContent` wire format.
//!
//! Everything is camelCase on the wire. Requests carry an ordered parts
//! list (optional inline image + text); responses carry candidates with
//! optional grounding metadata when web search was used.
//!
//! # Example request
//! ```json
//! {
//!   "contents": [
//!     {
//!       "parts": [
//!         {"inlineData": {"mimeType": "image/jpeg", "data": "..."}},
//!         {"text": "..."}
//!       ]
//!     }
//!   ],
//!   "tools": [{"googleSearch": {}}]
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use shopwise_core::SourceCitation;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<Tool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<Value>,
}

impl GenerateContentRequest {
    /// Single-turn user request from an ordered parts list, web search
    /// enabled.
    pub fn grounded(parts: Vec<Part>) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts,
            }],
            tools: Some(vec![Tool::google_search()]),
            generation_config: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// Untagged union of text and inline media parts.
///
/// Variant order matters for `#[serde(untagged)]` decoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Part::Text { text: text.into() }
    }

    pub fn inline_data(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Part::InlineData {
            inline_data: InlineData {
                mime_type: mime_type.into(),
                data: data.into(),
            },
        }
    }
}

/// Base64 inline payload used for image requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub google_search: GoogleSearch,
}

impl Tool {
    pub fn google_search() -> Self {
        Self {
            google_search: GoogleSearch {},
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleSearch {}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    #[serde(default)]
    pub grounding_metadata: Option<GroundingMetadata>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingMetadata {
    #[serde(default)]
    pub grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GroundingChunk {
    pub web: Option<WebSource>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebSource {
    pub uri: Option<String>,
    pub title: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate.
    pub fn text(&self) -> String {
        let Some(candidate) = self.candidates.first() else {
            return String::new();
        };
        let Some(content) = &candidate.content else {
            return String::new();
        };
        content
            .parts
            .iter()
            .filter_map(|part| match part {
                Part::Text { text } => Some(text.as_str()),
                Part::InlineData { .. } => None,
            })
            .collect()
    }

    /// Grounding citations of the first candidate, in original order.
    /// Chunks without a `web` entry still yield an (empty) citation so the
    /// ordering the API reported is preserved.
    pub fn citations(&self) -> Vec<SourceCitation> {
        self.candidates
            .first()
            .and_then(|candidate| candidate.grounding_metadata.as_ref())
            .map(|metadata| {
                metadata
                    .grounding_chunks
                    .iter()
                    .map(|chunk| match &chunk.web {
                        Some(web) => SourceCitation {
                            uri: web.uri.clone(),
                            title: web.title.clone(),
                        },
                        None => SourceCitation::default(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn grounded_request_serializes_google_search_tool() {
        let request = GenerateContentRequest::grounded(vec![Part::text("hi")]);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["tools"], json!([{"googleSearch": {}}]));
        assert_eq!(value["contents"][0]["parts"][0]["text"], "hi");
        assert!(value.get("generationConfig").is_none());
    }

    #[test]
    fn inline_data_part_uses_camel_case() {
        let part = Part::inline_data("image/jpeg", "QUJD");
        let value = serde_json::to_value(&part).unwrap();
        assert_eq!(value["inlineData"]["mimeType"], "image/jpeg");
        assert_eq!(value["inlineData"]["data"], "QUJD");
    }

    #[test]
    fn response_text_joins_parts() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{"text": "Hello "}, {"text": "world"}]
                }
            }]
        }))
        .unwrap();
        assert_eq!(response.text(), "Hello world");
    }

    #[test]
    fn response_without_candidates_has_empty_text() {
        let response: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(response.text(), "");
        assert!(response.citations().is_empty());
    }

    #[test]
    fn citations_preserve_order_and_tolerate_missing_fields() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {"parts": [{"text": "ok"}]},
                "groundingMetadata": {
                    "groundingChunks": [
                        {"web": {"uri": "https://ptt.cc/1", "title": "PTT 開箱"}},
                        {"web": {"title": "Mobile01 評測"}},
                        {}
                    ]
                }
            }]
        }))
        .unwrap();

        let citations = response.citations();
        assert_eq!(citations.len(), 3);
        assert_eq!(citations[0].uri.as_deref(), Some("https://ptt.cc/1"));
        assert_eq!(citations[1].uri, None);
        assert_eq!(citations[1].title.as_deref(), Some("Mobile01 評測"));
        assert!(citations[2].uri.is_none() && citations[2].title.is_none());
    }
}
