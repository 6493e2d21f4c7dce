//! Generation backends for siteforge.
//!
//! One backend is provided: the Gemini `generateContent` REST API, spoken
//! through a plain HTTP client.

mod gemini;

pub use gemini::{
    Candidate, Content, GeminiClient, GeminiRequest, GeminiResponse, GenerationConfig, Part,
    UsageMetadata,
};
