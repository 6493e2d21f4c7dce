//! Core data types for the siteforge website generator.
//!
//! This crate provides the foundation types shared across the generation
//! client, the reply splitter, and the packager.

mod artifact;
mod input;
mod message;
mod output;
mod request;
mod role;

pub use artifact::{
    CSS_MARKER, HTML_MARKER, JS_MARKER, MARKUP_ENTRY, SCRIPT_ENTRY, STYLE_ENTRY, SiteArtifact,
    SiteArtifactBuilder,
};
pub use input::Input;
pub use message::{Message, MessageBuilder};
pub use output::Output;
pub use request::{
    GenerateRequest, GenerateRequestBuilder, GenerateResponse, GenerateResponseBuilder,
};
pub use role::Role;
