use crate::transport::TransportError;
use thiserror::Error;

/// Structured error context for logging and diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Component that raised the error (e.g., "tts_client", "provider_response")
    pub source: Option<String>,
    /// Additional detail, such as the provider status code
    pub details: Option<String>,
    /// 1-based synthesis attempt the error was observed on
    pub attempt: Option<u32>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            source: None,
            details: None,
            attempt: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_attempt(mut self, attempt: u32) -> Self {
        self.attempt = Some(attempt);
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Unified error type for the relay.
///
/// Every failure of the synthesis client surfaces as one of these variants;
/// the relay endpoint renders the `Display` string as the response detail.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Missing credential: {message}")]
    MissingCredential { message: String },

    #[error("TikTok API Error: {message}{}", format_context(.context))]
    Provider {
        message: String,
        context: ErrorContext,
    },

    #[error("Network transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Invalid provider response: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TikTok TTS failed after {attempts} attempts: {last}")]
    SynthesisFailed {
        attempts: u32,
        #[source]
        last: Box<Error>,
    },

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput {
            message: msg.into(),
        }
    }

    pub fn missing_credential(msg: impl Into<String>) -> Self {
        Error::MissingCredential {
            message: msg.into(),
        }
    }

    pub fn provider(msg: impl Into<String>) -> Self {
        Self::provider_with_context(msg, ErrorContext::new())
    }

    pub fn provider_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Provider {
            message: msg.into(),
            context,
        }
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::configuration_with_context(msg, ErrorContext::new())
    }

    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// Whether another synthesis attempt may succeed where this one failed.
    ///
    /// Input and credential problems are terminal; anything the provider or
    /// the network reported is treated as transient.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Error::Provider { .. } | Error::Transport(_) | Error::Serialization(_)
        )
    }

    /// The last per-attempt error if this is a terminal retry failure.
    pub fn last_attempt_error(&self) -> Option<&Error> {
        match self {
            Error::SynthesisFailed { last, .. } => Some(last),
            _ => None,
        }
    }

    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Provider { context, .. } | Error::Configuration { context, .. } => {
                Some(context)
            }
            _ => None,
        }
    }
}
