use thiserror::Error;

/// User-facing message when the credential is missing. Kept in Traditional
/// Chinese to match the product's audience.
pub const MISSING_KEY_MESSAGE: &str =
    "API Key 尚未設定。請確認環境變數 GEMINI_API_KEY (或 API_KEY) 是否正確。";

/// User-facing message when every model candidate hit the rate limit.
pub const QUOTA_MESSAGE: &str =
    "API 配額已額滿 (Rate Limit Exceeded)。請稍後再試，或檢查您的 Google AI Studio 方案是否已達上限。";

/// Terminal failure classification for one search.
///
/// Parse degradation is deliberately absent: missing or malformed sections
/// in the model's reply degrade to placeholder text in `report`, they are
/// never surfaced as an error.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Neither query text nor an image was supplied; rejected locally
    /// before any network call.
    #[error("請輸入產品名稱或上傳圖片。")]
    InvalidRequest,

    /// The API credential is missing; no attempt was made.
    #[error("{0}")]
    Configuration(String),

    /// Every model candidate failed and the last error carried a
    /// quota / rate-limit signature.
    #[error("{0}")]
    QuotaExceeded(String),

    /// Every model candidate failed for some other reason.
    #[error("搜尋失敗: {0}")]
    RequestFailed(String),
}

impl SearchError {
    pub fn missing_key() -> Self {
        SearchError::Configuration(MISSING_KEY_MESSAGE.to_string())
    }

    pub fn quota_exceeded() -> Self {
        SearchError::QuotaExceeded(QUOTA_MESSAGE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_failed_display_wraps_message() {
        let err = SearchError::RequestFailed("boom".to_string());
        assert_eq!(err.to_string(), "搜尋失敗: boom");
    }

    #[test]
    fn quota_error_carries_fixed_message() {
        let err = SearchError::quota_exceeded();
        assert!(err.to_string().contains("Rate Limit Exceeded"));
    }
}
