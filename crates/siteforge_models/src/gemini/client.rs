//! HTTP transport for the Gemini `generateContent` endpoint.

use crate::gemini::{conversions, dto::GeminiResponse};
use async_trait::async_trait;
use reqwest::Client;
use siteforge_core::{GenerateRequest, GenerateResponse};
use siteforge_error::{GeminiError, GeminiErrorKind, SiteforgeError};
use std::time::Duration;
use tracing::{debug, error, instrument};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Upper bound on one generation call. Expiry surfaces as a remote-call
/// failure, not a hang.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Client for the Gemini text-generation REST API.
///
/// One request per generation: no streaming, no retries, no shared state
/// beyond the credential it was constructed with.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Creates a new client for the given credential and model.
    #[instrument(skip(api_key), fields(model = %model.as_ref()))]
    pub fn new(
        api_key: impl Into<String>,
        model: impl AsRef<str>,
    ) -> Result<Self, GeminiError> {
        Self::new_with_base_url(api_key, model, DEFAULT_BASE_URL)
    }

    /// Creates a client against a non-default endpoint, for tests.
    pub fn new_with_base_url(
        api_key: impl Into<String>,
        model: impl AsRef<str>,
        base_url: impl Into<String>,
    ) -> Result<Self, GeminiError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(GeminiError::new(GeminiErrorKind::MissingApiKey));
        }

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;

        let model = model.as_ref().to_string();
        let base_url = base_url.into();

        debug!(model = %model, url = %base_url, "Created Gemini client");

        Ok(Self {
            client,
            api_key,
            model,
            base_url,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    /// Generates a reply from the API.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails in transport (including the
    /// request timeout), the endpoint answers with a non-success status, or
    /// the response cannot be decoded.
    #[instrument(skip(self, req), fields(model = %self.model))]
    pub async fn generate(&self, req: &GenerateRequest) -> Result<GenerateResponse, GeminiError> {
        let wire_request = conversions::to_gemini_request(req)?;

        debug!(
            model = %self.model,
            contents = wire_request.contents().len(),
            "Sending request"
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&wire_request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                GeminiError::new(GeminiErrorKind::ApiRequest(format!("Request failed: {}", e)))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %error_text, "API error");

            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message: error_text,
            }));
        }

        let wire_response: GeminiResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            GeminiError::new(GeminiErrorKind::ResponseParsing(format!(
                "Failed to parse JSON: {}",
                e
            )))
        })?;

        debug!(
            candidates = wire_response.candidates.len(),
            "Received response"
        );

        conversions::from_gemini_response(&wire_response)
    }
}

#[async_trait]
impl siteforge_interface::SiteforgeDriver for GeminiClient {
    async fn generate(
        &self,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, SiteforgeError> {
        Ok(GeminiClient::generate(self, request).await?)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
