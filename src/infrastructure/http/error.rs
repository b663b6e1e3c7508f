//! HTTP Error Handling
//!
//! 错误种类到状态码与响应文案的唯一映射点；
//! 驱动错误等内部细节只写日志，不进入响应体

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::{ApplicationError, RepositoryError, ResolvePhase};

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// 对外错误文案
pub mod message {
    pub const INVALID_CAMPAIGN_MODEL_ID: &str = "invalid campaign_model_id";
    pub const NO_ACTIVE_VOICES: &str = "no active voices found for this campaign model";
    pub const DATABASE_QUERY_FAILED: &str = "database query failed";
    pub const FETCH_RECORDINGS_FAILED: &str = "failed to fetch recordings";
    pub const SCAN_RECORDING_FAILED: &str = "failed to scan recording";
    pub const ITERATE_RECORDINGS_FAILED: &str = "error iterating recordings";
    pub const DATABASE_UNAVAILABLE: &str = "database unavailable";
    pub const INTERNAL_ERROR: &str = "internal server error";
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    BadRequest {
        message: &'static str,
        detail: String,
    },
    NotFound {
        message: &'static str,
        detail: String,
    },
    Internal {
        message: &'static str,
        detail: String,
    },
    ServiceUnavailable {
        message: &'static str,
        detail: String,
    },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ApiError::BadRequest { message, .. }
            | ApiError::NotFound { message, .. }
            | ApiError::Internal { message, .. }
            | ApiError::ServiceUnavailable { message, .. } => *message,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::BadRequest { message, detail } => {
                tracing::warn!(status = status.as_u16(), error = %detail, "{}", message);
            }
            ApiError::NotFound { message, detail } => {
                tracing::warn!(status = status.as_u16(), error = %detail, "{}", message);
            }
            ApiError::Internal { message, detail } => {
                tracing::error!(status = status.as_u16(), error = %detail, "{}", message);
            }
            ApiError::ServiceUnavailable { message, detail } => {
                tracing::error!(status = status.as_u16(), error = %detail, "{}", message);
            }
        }

        (status, Json(ErrorResponse::new(self.message()))).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        let detail = e.to_string();
        match e {
            ApplicationError::InvalidArgument(_) => ApiError::BadRequest {
                message: message::INVALID_CAMPAIGN_MODEL_ID,
                detail,
            },
            ApplicationError::NotFound(_) => ApiError::NotFound {
                message: message::NO_ACTIVE_VOICES,
                detail,
            },
            ApplicationError::Store {
                phase: ResolvePhase::SelectVoice,
                ..
            } => ApiError::Internal {
                message: message::DATABASE_QUERY_FAILED,
                detail,
            },
            ApplicationError::Store {
                phase: ResolvePhase::FetchRecordings,
                source,
            } => {
                let message = match source {
                    RepositoryError::Corrupted(_) => message::SCAN_RECORDING_FAILED,
                    RepositoryError::IterationFailed(_) => message::ITERATE_RECORDINGS_FAILED,
                    RepositoryError::Unavailable(_) | RepositoryError::QueryFailed(_) => {
                        message::FETCH_RECORDINGS_FAILED
                    }
                };
                ApiError::Internal { message, detail }
            }
            ApplicationError::Unhealthy(_) => ApiError::ServiceUnavailable {
                message: message::DATABASE_UNAVAILABLE,
                detail,
            },
        }
    }
}
