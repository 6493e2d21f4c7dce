//! Gemini `generateContent` REST client.
//!
//! This module speaks the wire format of the Gemini text-generation endpoint
//! directly over reqwest: `dto` holds the wire types, `conversions` maps them
//! to and from the core request/response types, and `client` owns transport.

mod client;
mod conversions;
mod dto;

pub use client::GeminiClient;
pub use dto::{
    Candidate, Content, GeminiRequest, GeminiResponse, GenerationConfig, Part, UsageMetadata,
};
