//! Outbound transport to the TikTok speech endpoint.
//!
//! [`SpeechTransport`] is the seam between the synthesis client and the
//! network: one call is one HTTP round-trip, returning the raw response body.
//! Decoding and retry decisions stay in [`crate::tts`].

mod http;

pub use http::{HttpTransport, HttpTransportBuilder};

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// Default provider endpoint.
pub const TIKTOK_TTS_URL: &str = "https://api16-normal-v6.tiktokv.com/media/api/text/speech/invoke/";

/// User agent the provider expects from its Android client.
pub const TIKTOK_USER_AGENT: &str = "com.zhiliaoapp.musically/2022600030 (Linux; U; Android 7.1.2; es_ES; SM-G988N; Build/NRD90M;tt-ok/3.12.13.1)";

/// Failures below the provider's JSON layer.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("{0}")]
    Other(String),
}

/// Parameters of a single outbound synthesis call.
#[derive(Debug, Clone, Copy)]
pub struct SpeechCall<'a> {
    pub text: &'a str,
    pub voice: &'a str,
    pub session_id: &'a str,
}

/// One outbound round-trip to the provider.
#[async_trait]
pub trait SpeechTransport: Send + Sync {
    /// Sends the call and returns the response body of a 2xx reply.
    async fn invoke(&self, call: &SpeechCall<'_>) -> Result<Bytes, TransportError>;
}
