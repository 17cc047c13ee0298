// Route exports
pub mod extraction;

use actix_web::{error, http::StatusCode, web, HttpResponse};
use thiserror::Error;

use crate::models::ErrorResponse;

pub use extraction::AppState;

/// Slack on top of the text limit for JSON framing and escapes
const JSON_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(extraction::configure),
    );
}

/// Errors returned by HTTP handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Text of {size} bytes exceeds the {limit} byte limit")]
    PayloadTooLarge { size: usize, limit: usize },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    fn kind(&self) -> &'static str {
        match self {
            ApiError::InvalidJson(_) => "invalid_json",
            ApiError::PayloadTooLarge { .. } => "payload_too_large",
            ApiError::Internal(_) => "internal_error",
        }
    }
}

impl error::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidJson(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Internal(msg) = self {
            tracing::error!("Internal error: {}", msg);
        }

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.kind().to_string(),
            message: self.to_string(),
            status_code: self.status_code().as_u16(),
        })
    }
}

/// JSON body extractor configuration sized for `max_text_bytes` of text
pub fn json_config(max_text_bytes: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(max_text_bytes.saturating_add(JSON_OVERHEAD_BYTES))
        .error_handler(handle_json_payload_error)
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    match err {
        error::JsonPayloadError::OverflowKnownLength { length, limit } => {
            ApiError::PayloadTooLarge { size: length, limit }.into()
        }
        error::JsonPayloadError::Overflow { limit } => {
            ApiError::PayloadTooLarge { size: limit + 1, limit }.into()
        }
        other => ApiError::InvalidJson(other.to_string()).into(),
    }
}
