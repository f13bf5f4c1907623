use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use shopwise_core::SearchError;

pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Search(#[from] SearchError),
}

#[derive(Serialize)]
struct JsonError {
    message: String,
    r#type: String,
}

#[derive(Serialize)]
struct JsonErrorWrapper {
    error: JsonError,
}

impl AppError {
    fn error_type(&self) -> &'static str {
        match self {
            AppError::Search(SearchError::InvalidRequest) => "invalid_request",
            AppError::Search(SearchError::Configuration(_)) => "configuration_error",
            AppError::Search(SearchError::QuotaExceeded(_)) => "quota_exceeded",
            AppError::Search(SearchError::RequestFailed(_)) => "request_failed",
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Search(SearchError::InvalidRequest) => StatusCode::BAD_REQUEST,
            AppError::Search(SearchError::Configuration(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Search(SearchError::QuotaExceeded(_)) => StatusCode::TOO_MANY_REQUESTS,
            AppError::Search(SearchError::RequestFailed(_)) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let error_response = JsonErrorWrapper {
            error: JsonError {
                message: self.to_string(),
                r#type: self.error_type().to_string(),
            },
        };
        HttpResponse::build(status_code).json(error_response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quota_maps_to_429() {
        let err = AppError::from(SearchError::quota_exceeded());
        assert_eq!(err.status_code(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(err.error_type(), "quota_exceeded");
    }

    #[test]
    fn invalid_request_maps_to_400() {
        let err = AppError::from(SearchError::InvalidRequest);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn upstream_failure_maps_to_502() {
        let err = AppError::from(SearchError::RequestFailed("boom".to_string()));
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }
}
