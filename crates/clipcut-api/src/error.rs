//! API error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use clipcut_media::MediaError;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

pub type ApiResult<T> = Result<T, ApiError>;

/// Message returned when the request carries no URL.
pub const MISSING_URL_MESSAGE: &str = "URL do YouTube é obrigatória";

/// Message returned when the URL is not a YouTube URL.
pub const INVALID_URL_MESSAGE: &str = "URL inválida. Use uma URL do YouTube válida.";

/// Message returned for processing failures when provider detail is hidden.
pub const PROCESSING_FAILED_MESSAGE: &str = "Erro ao processar vídeo. Tente novamente mais tarde.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Corpo da requisição excede o limite permitido")]
    PayloadTooLarge,

    #[error("Erro ao processar vídeo: {0}")]
    Media(#[from] MediaError),

    #[error("Erro ao processar vídeo. Tente novamente mais tarde.")]
    ProcessingFailed,
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn missing_url() -> Self {
        Self::BadRequest(MISSING_URL_MESSAGE.to_string())
    }

    pub fn invalid_url() -> Self {
        Self::BadRequest(INVALID_URL_MESSAGE.to_string())
    }

    /// Wrap a provider failure, dropping its detail when `hide_detail` is set.
    pub fn from_media(err: MediaError, hide_detail: bool) -> Self {
        if hide_detail {
            warn!(error = %err, "Processing failed, detail withheld from response");
            Self::ProcessingFailed
        } else {
            Self::Media(err)
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Media(_) | ApiError::ProcessingFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "bad_request",
            ApiError::PayloadTooLarge => "payload_too_large",
            ApiError::Media(_) | ApiError::ProcessingFailed => "processing_failed",
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    code: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = ErrorResponse {
            error: self.to_string(),
            code: self.code(),
        };

        (status, Json(body)).into_response()
    }
}
