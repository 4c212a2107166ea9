use crate::tts::DEFAULT_VOICE;
use serde::{Deserialize, Serialize};

/// Body of `POST /tts`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TtsRequest {
    pub text: String,
    #[serde(default = "default_voice")]
    pub voice: String,
    /// Overrides the server's default session credential.
    #[serde(default)]
    pub session_id: Option<String>,
}

fn default_voice() -> String {
    DEFAULT_VOICE.to_string()
}

/// Error body returned with every non-200 response.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub detail: String,
}
