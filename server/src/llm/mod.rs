//! LLM — Gemini client for the conversational and query-parsing relays.
//!
//! DESIGN
//! ======
//! Thin HTTP wrapper around the `generateContent` REST endpoint. Handlers
//! depend on the [`GenerateText`] trait rather than the concrete client so
//! tests can substitute a mock.

pub mod config;
pub mod gemini;
pub mod types;

pub use gemini::GeminiClient;
pub use types::{GenerateText, LlmError};
