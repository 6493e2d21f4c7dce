//! Tests for the Gemini client.
//!
//! The live tests require a real credential in `GEMINI_API_KEY` (a `.env`
//! file is honored) and are ignored by default.
//!
//! Run with: cargo test --package siteforge_models -- --ignored

use siteforge_core::{GenerateRequest, Input, Message, Role};
use siteforge_error::GeminiErrorKind;
use siteforge_models::GeminiClient;

#[test]
fn empty_api_key_is_rejected() {
    let err = GeminiClient::new("", "gemini-2.5-flash-lite").unwrap_err();
    assert!(matches!(err.kind, GeminiErrorKind::MissingApiKey));
}

#[tokio::test]
async fn unreachable_endpoint_is_a_request_error() -> Result<(), Box<dyn std::error::Error>> {
    // Nothing listens on this port.
    let client =
        GeminiClient::new_with_base_url("test-key", "gemini-2.5-flash-lite", "http://127.0.0.1:9")?;

    let messages = vec![
        Message::builder()
            .role(Role::User)
            .content(vec![Input::Text("Say hello".to_string())])
            .build()?,
    ];
    let request = GenerateRequest::builder().messages(messages).build()?;

    let err = client.generate(&request).await.unwrap_err();
    assert!(matches!(err.kind, GeminiErrorKind::ApiRequest(_)));
    Ok(())
}

#[tokio::test]
#[ignore] // Requires a real GEMINI_API_KEY
async fn live_basic_generation() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let api_key = std::env::var("GEMINI_API_KEY")?;
    let client = GeminiClient::new(api_key, "gemini-2.5-flash-lite")?;

    let messages = vec![
        Message::builder()
            .role(Role::User)
            .content(vec![Input::Text("Say hello".to_string())])
            .build()?,
    ];
    let request = GenerateRequest::builder().messages(messages).build()?;

    let response = client.generate(&request).await?;

    assert!(!response.text().is_empty());
    println!("Response: {}", response.text());
    Ok(())
}
