//! Tests for the generation pipeline against a canned backend.

mod test_utils;

use siteforge_error::SiteforgeError;
use siteforge_server::SiteGenerator;
use std::sync::atomic::Ordering;
use test_utils::{MockDriver, reply_without_css, well_formed_reply};

#[tokio::test]
async fn well_formed_reply_becomes_a_packaged_site() {
    let generator = SiteGenerator::new(MockDriver::replying(well_formed_reply()), "mock-model");

    let site = generator.generate("a bakery landing page").await.unwrap();

    assert!(site.artifact().markup().contains("<h1>Bakery</h1>"));
    assert_eq!(site.artifact().styling(), "body { color: red; }");
    assert_eq!(site.artifact().scripting(), "console.log(1);");

    // Asset linking ran on the markup.
    assert!(
        site.artifact()
            .markup()
            .contains(r#"<link rel="stylesheet" href="style.css">"#)
    );
    assert!(
        site.artifact()
            .markup()
            .contains(r#"<script defer src="script.js"></script>"#)
    );

    // The archive is a zip.
    assert!(site.archive().starts_with(b"PK"));
}

#[tokio::test]
async fn blank_prompt_makes_no_remote_call() {
    let driver = MockDriver::replying(well_formed_reply());
    let calls = driver.call_counter();
    let generator = SiteGenerator::new(driver, "mock-model");

    let err = generator.generate("   \n\t  ").await.unwrap_err();

    assert!(matches!(err, SiteforgeError::EmptyPrompt));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn remote_failure_produces_no_archive() {
    let generator = SiteGenerator::new(MockDriver::failing(), "mock-model");

    let err = generator.generate("a bakery landing page").await.unwrap_err();

    assert!(matches!(err, SiteforgeError::Gemini(_)));
}

#[tokio::test]
async fn reply_missing_a_marker_is_a_typed_extraction_failure() {
    let generator = SiteGenerator::new(MockDriver::replying(reply_without_css()), "mock-model");

    let err = generator.generate("a bakery landing page").await.unwrap_err();

    assert!(matches!(err, SiteforgeError::Extract(_)));
}
