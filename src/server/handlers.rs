use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, info};

use super::types::{ErrorBody, TtsRequest};
use super::RelayState;
use crate::tts::TtsOptions;

const MISSING_SESSION_DETAIL: &str =
    "TIKTOK_SESSIONID not configured and not provided in request.";

/// Handles `POST /tts`.
///
/// The request's `session_id` wins over the configured default. Every
/// failure, including a missing credential, is reported as HTTP 500 with a
/// `{"detail": ...}` body; success returns the MP3 bytes as `audio/mpeg`.
pub async fn handle_tts(State(state): State<RelayState>, Json(req): Json<TtsRequest>) -> Response {
    let session_id = req
        .session_id
        .as_deref()
        .filter(|s| !s.is_empty())
        .or(state.default_session_id.as_deref());

    let Some(session_id) = session_id else {
        error!("no session credential in request or configuration");
        return internal_error(MISSING_SESSION_DETAIL.to_string());
    };

    let options = TtsOptions::default()
        .with_voice(req.voice)
        .with_max_attempts(state.max_attempts);

    match state.client.synthesize(&req.text, session_id, &options).await {
        Ok(audio) => {
            info!(bytes = audio.data.len(), voice = options.voice.as_str(), "tts relay served audio");
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, audio.format.mime_type())],
                audio.data,
            )
                .into_response()
        }
        Err(e) => {
            error!(error = %e, "tts relay failed");
            internal_error(e.to_string())
        }
    }
}

fn internal_error(detail: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody { detail }),
    )
        .into_response()
}
