//! Gemini-backed language model stages of the script pipeline.
//!
//! [`GeminiClient`] wraps the `generateContent` REST endpoint; [`LlmService`]
//! layers the three prompt-driven stages on top of it: keyword extraction,
//! viral-angle generation, and script writing.

pub mod client;
pub mod envelope;
pub mod error;
pub mod prompts;
pub mod service;

pub use client::GeminiClient;
pub use envelope::{parse_viral_angle_envelope, EnvelopeError};
pub use error::LlmError;
pub use service::{validate_keyword, LlmService, MAX_KEYWORD_CHARS};
