//! Relay endpoint exposing the synthesis client over HTTP.
//!
//! A single route, `POST /tts`, accepts `{ text, voice?, session_id? }` and
//! answers with MP3 audio or a `{ detail }` error body.

mod handlers;
mod types;

use axum::{routing::post, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::RelayConfig;
use crate::tts::TtsClient;
use crate::{Error, Result};

pub use handlers::handle_tts;
pub use types::{ErrorBody, TtsRequest};

/// State shared by request handlers. Read-only after construction.
#[derive(Clone)]
pub struct RelayState {
    client: TtsClient,
    default_session_id: Option<Arc<str>>,
    max_attempts: u32,
}

impl RelayState {
    pub fn new(client: TtsClient, config: &RelayConfig) -> Self {
        Self {
            client,
            default_session_id: config.default_session_id.as_deref().map(Arc::from),
            max_attempts: config.max_attempts,
        }
    }
}

/// HTTP server wrapping a [`TtsClient`].
pub struct RelayServer {
    config: RelayConfig,
    client: TtsClient,
}

impl RelayServer {
    pub fn new(config: RelayConfig, client: TtsClient) -> Self {
        Self { config, client }
    }

    /// Builds the server with the default reqwest transport.
    pub fn from_config(config: RelayConfig) -> Result<Self> {
        let client = TtsClient::from_config(&config)?;
        Ok(Self::new(config, client))
    }

    pub fn router(&self) -> Router {
        router(RelayState::new(self.client.clone(), &self.config))
    }

    /// Binds the configured address and serves until the process exits.
    pub async fn run(self) -> Result<()> {
        let app = self.router();
        let listener = tokio::net::TcpListener::bind(self.config.bind_addr).await?;
        info!(
            addr = %self.config.bind_addr,
            default_session = self.config.default_session_id.is_some(),
            max_attempts = self.config.max_attempts,
            "tts relay listening"
        );
        axum::serve(listener, app).await.map_err(Error::Io)
    }
}

pub fn router(state: RelayState) -> Router {
    Router::new()
        .route("/tts", post(handle_tts))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
