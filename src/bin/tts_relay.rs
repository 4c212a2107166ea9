//! tts-relay — HTTP relay for TikTok text-to-speech.
//!
//! Reads `.env` if present, then the environment:
//!   TIKTOK_SESSIONID        default session credential
//!   TTS_RELAY_ADDR          bind address (default 0.0.0.0:8000)
//!   TIKTOK_TTS_URL          provider endpoint override
//!   TTS_MAX_ATTEMPTS        attempts per request (default 3)
//!   TTS_HTTP_TIMEOUT_SECS   per-attempt timeout (default 20)
//!   TTS_PROXY_URL           outbound proxy
//!   RUST_LOG                log filter (default info)

use tiktok_tts_relay::{RelayConfig, RelayServer};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "loaded .env");
    }

    let config = RelayConfig::from_env()?;
    if config.default_session_id.is_none() {
        tracing::warn!("TIKTOK_SESSIONID is not set; requests must carry session_id");
    }

    RelayServer::from_config(config)?.run().await?;
    Ok(())
}
