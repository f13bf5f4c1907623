//! Best-effort extraction of display sections from the model's markdown
//! reply.
//!
//! The model is instructed to answer with five fixed `#` headers, but the
//! reply format is not guaranteed. Extraction therefore never fails:
//! missing or malformed sections degrade to placeholder text.

use serde::{Deserialize, Serialize};

use crate::analysis::{AnalysisResult, SourceCitation};

pub const SECTION_OVERVIEW: &str = "產品概覽";
pub const SECTION_PRICE: &str = "價格分析";
pub const SECTION_PROS: &str = "優點";
pub const SECTION_CONS: &str = "缺點";
pub const SECTION_VERDICT: &str = "專家點評";

pub const PLACEHOLDER_OVERVIEW: &str = "暫無概覽資訊。";
pub const PLACEHOLDER_PRICE: &str = "暫無價格資訊。";
pub const PLACEHOLDER_VERDICT: &str = "暫無點評。";

/// Extract the body of the section titled `# <header>`.
///
/// The section runs from the header line to the next top-level header or the
/// end of the text. A body containing the `- ` bullet delimiter is split
/// into trimmed non-empty items; otherwise the whole trimmed body is the
/// single item. An absent header yields an empty vec.
pub fn extract_section(text: &str, header: &str) -> Vec<String> {
    let wanted = header.trim().to_lowercase();
    let mut body_lines: Vec<&str> = Vec::new();
    let mut capturing = false;

    for line in text.lines() {
        if let Some(rest) = line.strip_prefix('#') {
            if !rest.starts_with('#') {
                if capturing {
                    break;
                }
                if rest.trim().to_lowercase() == wanted {
                    capturing = true;
                }
                continue;
            }
        }
        if capturing {
            body_lines.push(line);
        }
    }

    let body = body_lines.join("\n").trim().to_string();
    if body.is_empty() {
        return Vec::new();
    }

    if body.contains("- ") {
        return body
            .split("- ")
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect();
    }

    vec![body]
}

fn first_item(text: &str, header: &str, placeholder: &str) -> String {
    extract_section(text, header)
        .into_iter()
        .next()
        .unwrap_or_else(|| placeholder.to_string())
}

/// The five display fields plus citations, assembled from a raw result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductReport {
    pub overview: String,
    pub price: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub verdict: String,
    pub sources: Vec<SourceCitation>,
}

impl ProductReport {
    pub fn from_analysis(result: &AnalysisResult) -> Self {
        Self {
            overview: first_item(&result.raw_text, SECTION_OVERVIEW, PLACEHOLDER_OVERVIEW),
            price: first_item(&result.raw_text, SECTION_PRICE, PLACEHOLDER_PRICE),
            pros: extract_section(&result.raw_text, SECTION_PROS),
            cons: extract_section(&result.raw_text, SECTION_CONS),
            verdict: first_item(&result.raw_text, SECTION_VERDICT, PLACEHOLDER_VERDICT),
            sources: result.sources.clone(),
        }
    }

    /// First sentence of the price section, for compact display.
    pub fn price_highlight(&self) -> &str {
        self.price.split('。').next().unwrap_or(&self.price)
    }
}
