//! Fixed prompt template for product research.
//!
//! The instruction block pins down three things the rest of the system
//! relies on: the model must run Google Search, it must weight community
//! forums (PTT, Dcard, Mobile01, Threads, Reddit) over official marketing
//! copy, and it must answer in Traditional Chinese under exactly the five
//! markdown headers the report parser looks for.

use shopwise_core::report::{
    SECTION_CONS, SECTION_OVERVIEW, SECTION_PRICE, SECTION_PROS, SECTION_VERDICT,
};
use shopwise_core::AnalysisRequest;

use crate::wire::Part;

const IMAGE_LEAD_IN: &str = "請辨識這張圖片中的產品，並針對該產品進行分析。";

fn instruction_text(query: &str, has_image: bool) -> String {
    let image_hint = if has_image {
        " (請結合圖片辨識結果)"
    } else {
        ""
    };

    format!(
        r#"你是一位專業的台灣購物助手。使用者正在搜尋： "{query}"{image_hint}。

請執行 Google Search 來尋找該產品的最新資訊、價格與評價。

**重要評價搜尋策略：**
請特別針對 **PTT (批踢踢實業坊)**、**Dcard**、**Mobile01**、**Threads** 以及國外知名論壇 (如 Reddit) 搜尋真實的使用者心得與評價。不要只看官方宣傳。

請嚴格按照以下 Markdown 標題格式回傳 (使用繁體中文)：

# {SECTION_OVERVIEW}
(簡短介紹產品是什麼，如果是圖片搜尋請先說明辨識出的型號)。

# {SECTION_PRICE}
(說明目前的市場價格範圍、是否有特價，幣別請主要使用 TWD)。

# {SECTION_PROS}
(條列出使用者在論壇上提到的主要優點)。

# {SECTION_CONS}
(條列出使用者在論壇上提到的抱怨或災情)。

# {SECTION_VERDICT}
(綜合 PTT/Threads 鄉民意見與客觀規格，給出最終購買建議)。

語氣請保持客觀、專業但親切，使用台灣習慣的用語。"#
    )
}

/// Ordered request parts: inline image (if any) with its lead-in, then the
/// instruction block embedding the user query.
pub fn build_parts(request: &AnalysisRequest) -> Vec<Part> {
    let mut parts = Vec::new();

    if let Some(image) = &request.image {
        parts.push(Part::inline_data(image.mime_type.as_str(), image.data.as_str()));
        parts.push(Part::text(IMAGE_LEAD_IN));
    }

    parts.push(Part::text(instruction_text(
        &request.query,
        request.image.is_some(),
    )));

    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopwise_core::ImageAttachment;

    fn text_of(part: &Part) -> &str {
        match part {
            Part::Text { text } => text,
            Part::InlineData { .. } => panic!("expected text part"),
        }
    }

    #[test]
    fn text_only_request_builds_single_part() {
        let parts = build_parts(&AnalysisRequest::text("Sony XM5"));
        assert_eq!(parts.len(), 1);

        let instruction = text_of(&parts[0]);
        assert!(instruction.contains("\"Sony XM5\""));
        assert!(!instruction.contains("結合圖片辨識結果"));
    }

    #[test]
    fn instruction_names_all_five_headers_in_order() {
        let parts = build_parts(&AnalysisRequest::text("PS5 Slim"));
        let instruction = text_of(&parts[0]);

        let positions: Vec<usize> = [
            SECTION_OVERVIEW,
            SECTION_PRICE,
            SECTION_PROS,
            SECTION_CONS,
            SECTION_VERDICT,
        ]
        .iter()
        .map(|header| {
            instruction
                .find(&format!("# {header}"))
                .unwrap_or_else(|| panic!("missing header {header}"))
        })
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn image_request_puts_inline_data_first() {
        let request =
            AnalysisRequest::text("這是什麼耳機?").with_image(ImageAttachment::jpeg("QUJD"));
        let parts = build_parts(&request);
        assert_eq!(parts.len(), 3);

        match &parts[0] {
            Part::InlineData { inline_data } => {
                assert_eq!(inline_data.mime_type, "image/jpeg");
                assert_eq!(inline_data.data, "QUJD");
            }
            Part::Text { .. } => panic!("expected inline data first"),
        }
        assert_eq!(text_of(&parts[1]), IMAGE_LEAD_IN);
        assert!(text_of(&parts[2]).contains("結合圖片辨識結果"));
    }
}
