//! Google Gemini API integration.

mod client;

pub use client::GeminiClient;
