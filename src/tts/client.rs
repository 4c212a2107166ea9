//! TTS (Text-to-Speech) client.

use super::retry::{Decision, RetryPolicy};
use super::types::{AudioOutput, ProviderResponse, TtsOptions};
use crate::config::RelayConfig;
use crate::transport::{HttpTransport, SpeechCall, SpeechTransport};
use crate::{Error, ErrorContext, Result};
use base64::Engine as _;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Message the provider sends back when the session cookie is not accepted.
const SPEECH_LOAD_FAILURE: &str = "Couldn't load speech. Try again.";

/// Client for the TikTok text-to-speech endpoint.
///
/// Each call to [`TtsClient::synthesize`] makes up to `max_attempts`
/// sequential requests and returns the first decoded audio payload.
#[derive(Clone)]
pub struct TtsClient {
    transport: Arc<dyn SpeechTransport>,
    base_delay: Duration,
}

impl TtsClient {
    pub fn builder() -> TtsClientBuilder {
        TtsClientBuilder::new()
    }

    pub fn from_config(config: &RelayConfig) -> Result<Self> {
        let mut builder = TtsClientBuilder::new()
            .url(config.provider_url.clone())
            .timeout(config.request_timeout);
        if let Some(proxy) = &config.proxy_url {
            builder = builder.proxy_url(proxy.clone());
        }
        builder.build()
    }

    pub async fn synthesize(
        &self,
        text: &str,
        session_id: &str,
        options: &TtsOptions,
    ) -> Result<AudioOutput> {
        if text.is_empty() {
            return Err(Error::invalid_input("text must not be empty"));
        }
        if session_id.is_empty() {
            return Err(Error::missing_credential("TikTok session ID is required."));
        }
        if options.max_attempts == 0 {
            return Err(Error::invalid_input("max_attempts must be at least 1"));
        }

        let policy = RetryPolicy::new(options.max_attempts).with_base_delay(self.base_delay);
        let call = SpeechCall {
            text,
            voice: &options.voice,
            session_id,
        };

        let mut attempt = 0;
        loop {
            attempt += 1;
            info!(
                attempt,
                max_attempts = policy.max_attempts,
                voice = call.voice,
                text_len = text.len(),
                "tts synthesis attempt"
            );

            let err = match self.attempt_once(&call, attempt).await {
                Ok(data) => {
                    info!(attempt, bytes = data.len(), "tts synthesis succeeded");
                    return Ok(AudioOutput::mp3(data));
                }
                Err(e) => e,
            };

            match policy.decide(attempt, &err) {
                Decision::Retry { delay } => {
                    warn!(
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "tts attempt failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                }
                Decision::Fail => {
                    warn!(attempt, error = %err, "tts attempts exhausted");
                    return Err(Error::SynthesisFailed {
                        attempts: attempt,
                        last: Box::new(err),
                    });
                }
            }
        }
    }

    async fn attempt_once(&self, call: &SpeechCall<'_>, attempt: u32) -> Result<Vec<u8>> {
        let body = self.transport.invoke(call).await?;
        decode_speech(&body, attempt)
    }
}

/// Extracts the MP3 bytes from a provider reply.
pub(crate) fn decode_speech(body: &[u8], attempt: u32) -> Result<Vec<u8>> {
    let resp: ProviderResponse = serde_json::from_slice(body)?;
    let context = ErrorContext::new()
        .with_source("provider_response")
        .with_attempt(attempt);

    if resp.message.as_deref() == Some(SPEECH_LOAD_FAILURE) {
        return Err(Error::provider_with_context(
            "Couldn't load speech. Session ID may be invalid.",
            context,
        ));
    }

    match (resp.status_code, resp.data.and_then(|d| d.v_str)) {
        (Some(0), Some(encoded)) => {
            if encoded.is_empty() {
                return Err(Error::provider_with_context("empty audio data", context));
            }
            base64::engine::general_purpose::STANDARD
                .decode(encoded.as_bytes())
                .map_err(|e| {
                    Error::provider_with_context(
                        format!("invalid base64 audio data: {}", e),
                        context,
                    )
                })
        }
        (status_code, _) => {
            let message = resp
                .message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| "Unknown API error".to_string());
            let context = match status_code {
                Some(code) => context.with_details(format!("status_code: {}", code)),
                None => context,
            };
            Err(Error::provider_with_context(message, context))
        }
    }
}

pub struct TtsClientBuilder {
    transport: Option<Arc<dyn SpeechTransport>>,
    url: Option<String>,
    proxy_url: Option<String>,
    timeout: Duration,
    base_delay: Duration,
}

impl TtsClientBuilder {
    pub fn new() -> Self {
        Self {
            transport: None,
            url: None,
            proxy_url: None,
            timeout: Duration::from_secs(20),
            base_delay: Duration::from_secs(1),
        }
    }

    /// Uses a custom transport instead of the default reqwest one.
    pub fn transport(mut self, transport: Arc<dyn SpeechTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn proxy_url(mut self, proxy_url: impl Into<String>) -> Self {
        self.proxy_url = Some(proxy_url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_delay(mut self, base_delay: Duration) -> Self {
        self.base_delay = base_delay;
        self
    }

    pub fn build(self) -> Result<TtsClient> {
        let transport = match self.transport {
            Some(t) => t,
            None => {
                let mut builder = HttpTransport::builder().timeout(self.timeout);
                if let Some(url) = self.url {
                    builder = builder.url(url);
                }
                if let Some(proxy) = self.proxy_url {
                    builder = builder.proxy_url(proxy);
                }
                Arc::new(builder.build()?)
            }
        };
        Ok(TtsClient {
            transport,
            base_delay: self.base_delay,
        })
    }
}

impl Default for TtsClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
