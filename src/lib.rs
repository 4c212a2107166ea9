//! # tiktok-tts-relay
//!
//! A thin HTTP relay in front of the TikTok text-to-speech API.
//!
//! ## Overview
//!
//! Callers `POST /tts` with `{ "text": ..., "voice"?: ..., "session_id"?: ... }`.
//! The relay resolves a session credential (request first, then the configured
//! default), asks the provider to synthesize the text, and returns the decoded
//! MP3 bytes with `Content-Type: audio/mpeg`. Any failure is reported as
//! HTTP 500 with a `{"detail": ...}` body.
//!
//! Provider calls are retried sequentially: after a failed attempt `n` the
//! client waits `n` seconds before the next one, up to `max_attempts` calls.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tiktok_tts_relay::{RelayConfig, TtsClient, TtsOptions};
//!
//! #[tokio::main]
//! async fn main() -> tiktok_tts_relay::Result<()> {
//!     let config = RelayConfig::from_env()?;
//!     let client = TtsClient::from_config(&config)?;
//!
//!     let audio = client
//!         .synthesize("xin chào", "your-session-id", &TtsOptions::default())
//!         .await?;
//!     std::fs::write("hello.mp3", &audio.data)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`tts`] | Synthesis client, retry policy and audio types |
//! | [`server`] | axum router and the `POST /tts` handler |
//! | [`transport`] | Outbound HTTP transport to the provider |
//! | [`config`] | Environment-driven configuration |

pub mod config;
pub mod error;
pub mod server;
pub mod transport;
pub mod tts;

pub use config::RelayConfig;
pub use error::{Error, ErrorContext};
pub use server::{RelayServer, RelayState};
pub use transport::{HttpTransport, SpeechCall, SpeechTransport, TransportError};
pub use tts::{AudioFormat, AudioOutput, RetryPolicy, TtsClient, TtsClientBuilder, TtsOptions};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;
