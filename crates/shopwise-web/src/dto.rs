//! Request/response shapes for the browser front end.

use serde::{Deserialize, Serialize};

use shopwise_core::{AnalysisRequest, ImageAttachment, ProductReport, SourceCitation};

#[derive(Debug, Deserialize)]
pub struct SearchRequestDto {
    #[serde(default)]
    pub query: String,
    /// Base64-encoded image, with or without a `data:image/...;base64,`
    /// prefix (file readers in the browser produce the prefixed form).
    #[serde(default)]
    pub image_base64: Option<String>,
    #[serde(default)]
    pub image_mime_type: Option<String>,
}

fn strip_data_url_prefix(data: &str) -> &str {
    if data.contains(',') {
        data.split(',').nth(1).unwrap_or(data)
    } else {
        data
    }
}

impl SearchRequestDto {
    pub fn into_analysis_request(self) -> AnalysisRequest {
        let image = self
            .image_base64
            .as_deref()
            .map(str::trim)
            .filter(|data| !data.is_empty())
            .map(|data| ImageAttachment {
                data: strip_data_url_prefix(data).to_string(),
                mime_type: self
                    .image_mime_type
                    .clone()
                    .unwrap_or_else(|| "image/jpeg".to_string()),
            });

        AnalysisRequest {
            query: self.query,
            image,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchResponseDto {
    pub overview: String,
    pub price: String,
    pub price_highlight: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub verdict: String,
    pub sources: Vec<SourceCitation>,
}

impl From<ProductReport> for SearchResponseDto {
    fn from(report: ProductReport) -> Self {
        let price_highlight = report.price_highlight().to_string();
        Self {
            overview: report.overview,
            price: report.price,
            price_highlight,
            pros: report.pros,
            cons: report.cons,
            verdict: report.verdict,
            sources: report.sources,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_url_prefix_is_stripped() {
        let dto = SearchRequestDto {
            query: String::new(),
            image_base64: Some("data:image/jpeg;base64,QUJD".to_string()),
            image_mime_type: None,
        };
        let request = dto.into_analysis_request();
        let image = request.image.unwrap();
        assert_eq!(image.data, "QUJD");
        assert_eq!(image.mime_type, "image/jpeg");
    }

    #[test]
    fn bare_base64_passes_through() {
        let dto = SearchRequestDto {
            query: "Sony XM5".to_string(),
            image_base64: Some("QUJD".to_string()),
            image_mime_type: Some("image/png".to_string()),
        };
        let request = dto.into_analysis_request();
        assert_eq!(request.image.unwrap().mime_type, "image/png");
    }

    #[test]
    fn blank_image_field_means_no_image() {
        let dto = SearchRequestDto {
            query: "Sony XM5".to_string(),
            image_base64: Some("   ".to_string()),
            image_mime_type: None,
        };
        assert!(dto.into_analysis_request().image.is_none());
    }
}
