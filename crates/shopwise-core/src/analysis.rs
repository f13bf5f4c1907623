//! Request and result types for a single product search.

use serde::{Deserialize, Serialize};

/// Inline image payload attached to a search. The data is already
/// base64-encoded since that is what the upstream API wants on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageAttachment {
    pub data: String,
    pub mime_type: String,
}

impl ImageAttachment {
    pub fn jpeg(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            mime_type: "image/jpeg".to_string(),
        }
    }
}

/// One user-initiated search: a free-text query, an image, or both.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub image: Option<ImageAttachment>,
}

impl AnalysisRequest {
    pub fn text(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            image: None,
        }
    }

    pub fn with_image(mut self, image: ImageAttachment) -> Self {
        self.image = Some(image);
        self
    }

    /// A request with neither query text nor an image has nothing to ask
    /// the model and must be rejected before any network call.
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty() && self.image.is_none()
    }
}

/// Source reference the API claims to have used during web search.
/// Both fields are optional because the upstream may omit either.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceCitation {
    pub uri: Option<String>,
    pub title: Option<String>,
}

/// Raw model output for one successful search, immutable once produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub raw_text: String,
    pub sources: Vec<SourceCitation>,
}
