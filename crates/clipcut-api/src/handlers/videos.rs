//! Video processing handlers.

use std::time::Instant;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use clipcut_models::{extract_youtube_id, is_youtube_url, ClipProposal, VideoInfo};
use clipcut_planner::{plan, CutStrategy};

use crate::error::{ApiError, ApiResult};
use crate::metrics;
use crate::security::{sanitize_for_log, validate_video_url, UrlValidationResult};
use crate::state::AppState;

/// Message returned with every successful response.
pub const SUCCESS_MESSAGE: &str = "Vídeo processado com sucesso!";

/// Process video request.
#[derive(Debug, Default, Deserialize)]
pub struct ProcessVideoRequest {
    #[serde(default)]
    pub url: Option<String>,
}

/// Process video response.
#[derive(Debug, Serialize)]
pub struct ProcessVideoResponse {
    pub success: bool,
    pub video_info: VideoInfo,
    pub suggested_cuts: Vec<ClipProposal>,
    pub message: String,
}

/// Fetch metadata for a YouTube URL and suggest clips from it.
pub async fn process_video(
    State(state): State<AppState>,
    payload: Result<Json<ProcessVideoRequest>, JsonRejection>,
) -> ApiResult<Json<ProcessVideoResponse>> {
    // A body we cannot read carries no URL
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            return Err(ApiError::PayloadTooLarge);
        }
        Err(rejection) => {
            debug!(error = %rejection, "Unreadable process-video body");
            ProcessVideoRequest::default()
        }
    };

    let url = request
        .url
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .ok_or_else(ApiError::missing_url)?;

    if !is_youtube_url(url) {
        return Err(ApiError::invalid_url());
    }

    let url = match validate_video_url(url) {
        UrlValidationResult::Valid(url) => url,
        UrlValidationResult::DomainNotAllowed(domain) => {
            warn!(domain = %domain, "Rejected non-YouTube host");
            return Err(ApiError::invalid_url());
        }
        other => {
            let message = other
                .into_result()
                .err()
                .unwrap_or_else(|| crate::error::INVALID_URL_MESSAGE.to_string());
            return Err(ApiError::bad_request(message));
        }
    };

    let video_id = extract_youtube_id(&url).ok();
    info!(
        url = %sanitize_for_log(&url),
        video_id = video_id.as_deref().unwrap_or("unknown"),
        provider = state.metadata.name(),
        "Processing video"
    );

    let start = Instant::now();
    let video_info = state
        .metadata
        .fetch(&url)
        .await
        .map_err(|e| ApiError::from_media(e, state.config.is_production()))?;

    let suggested_cuts = plan(&video_info);
    let strategy = CutStrategy::for_duration(video_info.duration);
    metrics::record_suggestions(strategy.as_str(), suggested_cuts.len());

    info!(
        video_id = video_id.as_deref().unwrap_or("unknown"),
        duration = video_info.duration,
        strategy = strategy.as_str(),
        suggestions = suggested_cuts.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Video processed"
    );

    Ok(Json(ProcessVideoResponse {
        success: true,
        video_info,
        suggested_cuts,
        message: SUCCESS_MESSAGE.to_string(),
    }))
}
