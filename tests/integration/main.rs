//! Integration tests for the relay: a mockito stand-in for the TikTok
//! endpoint, and the axum router driven in-process.

mod relay;
