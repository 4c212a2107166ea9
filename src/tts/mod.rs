//! Synthesis client: sends text to the TikTok speech endpoint and decodes the
//! base64 MP3 it returns, retrying transient failures with linear backoff.

mod client;
mod retry;
mod types;

pub use client::{TtsClient, TtsClientBuilder};
pub use retry::{Decision, RetryPolicy};
pub use types::{AudioFormat, AudioOutput, TtsOptions, DEFAULT_VOICE};
