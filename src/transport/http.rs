use super::{SpeechCall, SpeechTransport, TransportError, TIKTOK_TTS_URL, TIKTOK_USER_AGENT};
use crate::{Error, Result};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{COOKIE, USER_AGENT};
use reqwest::Proxy;
use std::time::Duration;

/// reqwest-backed transport to the TikTok speech endpoint.
pub struct HttpTransport {
    client: reqwest::Client,
    url: String,
}

impl HttpTransport {
    pub fn builder() -> HttpTransportBuilder {
        HttpTransportBuilder::new()
    }
}

#[async_trait]
impl SpeechTransport for HttpTransport {
    async fn invoke(&self, call: &SpeechCall<'_>) -> std::result::Result<Bytes, TransportError> {
        let resp = self
            .client
            .post(&self.url)
            .header(USER_AGENT, TIKTOK_USER_AGENT)
            .header(COOKIE, format!("sessionid={}", call.session_id))
            .query(&[
                ("text_speaker", call.voice),
                ("req_text", call.text),
                ("speaker_map_type", "0"),
                ("aid", "1233"),
            ])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(resp.bytes().await?)
    }
}

pub struct HttpTransportBuilder {
    url: Option<String>,
    timeout: Duration,
    proxy_url: Option<String>,
}

impl HttpTransportBuilder {
    pub fn new() -> Self {
        Self {
            url: None,
            timeout: Duration::from_secs(20),
            proxy_url: None,
        }
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn proxy_url(mut self, proxy_url: impl Into<String>) -> Self {
        self.proxy_url = Some(proxy_url.into());
        self
    }

    pub fn build(self) -> Result<HttpTransport> {
        let mut builder = reqwest::Client::builder().timeout(self.timeout);

        if let Some(proxy_url) = &self.proxy_url {
            let proxy = Proxy::all(proxy_url)
                .map_err(|e| Error::configuration(format!("Invalid proxy URL: {}", e)))?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| Error::configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(HttpTransport {
            client,
            url: self.url.unwrap_or_else(|| TIKTOK_TTS_URL.to_string()),
        })
    }
}

impl Default for HttpTransportBuilder {
    fn default() -> Self {
        Self::new()
    }
}
