//! TTS (Text-to-Speech) types.

use serde::Deserialize;

/// Voice used when the caller does not pick one.
pub const DEFAULT_VOICE: &str = "BV075_streaming";

/// Audio returned by a successful synthesis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioOutput {
    pub data: Vec<u8>,
    pub format: AudioFormat,
}

impl AudioOutput {
    pub fn mp3(data: Vec<u8>) -> Self {
        Self {
            data,
            format: AudioFormat::Mp3,
        }
    }
}

/// The provider only ever returns MP3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    Mp3,
}

impl AudioFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Mp3 => "audio/mpeg",
        }
    }
}

/// Per-call synthesis options.
#[derive(Debug, Clone)]
pub struct TtsOptions {
    pub voice: String,
    pub max_attempts: u32,
}

impl TtsOptions {
    pub fn with_voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = voice.into();
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }
}

impl Default for TtsOptions {
    fn default() -> Self {
        Self {
            voice: DEFAULT_VOICE.to_string(),
            max_attempts: 3,
        }
    }
}

/// JSON envelope returned by the speech endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ProviderResponse {
    #[serde(default)]
    pub status_code: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<ProviderData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ProviderData {
    #[serde(default)]
    pub v_str: Option<String>,
}
