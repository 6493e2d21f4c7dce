//! Type conversions between siteforge and Gemini wire formats.

use crate::gemini::dto::{Content, GeminiRequest, GeminiResponse, GenerationConfig, Part};
use siteforge_core::{GenerateRequest, GenerateResponse, Input, Output, Role};
use siteforge_error::{GeminiError, GeminiErrorKind};

/// Converts a siteforge GenerateRequest to the Gemini wire format.
///
/// System messages fold into the request's `systemInstruction`; user and
/// assistant messages become `contents` with the roles the endpoint expects.
pub fn to_gemini_request(req: &GenerateRequest) -> Result<GeminiRequest, GeminiError> {
    let mut system_parts = Vec::new();
    let mut contents = Vec::new();

    for msg in req.messages() {
        let parts: Vec<Part> = msg
            .content()
            .iter()
            .map(|input| match input {
                Input::Text(text) => Part { text: text.clone() },
            })
            .collect();

        match msg.role() {
            Role::System => system_parts.extend(parts),
            Role::User => contents.push(Content {
                role: Some("user".to_string()),
                parts,
            }),
            Role::Assistant => contents.push(Content {
                role: Some("model".to_string()),
                parts,
            }),
        }
    }

    if contents.is_empty() {
        return Err(GeminiError::new(GeminiErrorKind::InvalidRequest(
            "request carries no user or assistant messages".to_string(),
        )));
    }

    let system_instruction = (!system_parts.is_empty()).then_some(Content {
        role: None,
        parts: system_parts,
    });

    let generation_config = GenerationConfig {
        temperature: *req.temperature(),
        max_output_tokens: *req.max_tokens(),
    };

    let mut builder = GeminiRequest::builder();
    builder
        .system_instruction(system_instruction)
        .contents(contents);

    if !generation_config.is_empty() {
        builder.generation_config(Some(generation_config));
    }

    builder.build().map_err(|e| {
        GeminiError::new(GeminiErrorKind::InvalidRequest(format!(
            "Failed to build request: {}",
            e
        )))
    })
}

/// Converts a Gemini wire response to a siteforge GenerateResponse.
///
/// Takes the first candidate's text parts; a reply with no candidates or no
/// text is an error, never an empty success.
pub fn from_gemini_response(response: &GeminiResponse) -> Result<GenerateResponse, GeminiError> {
    let candidate = response
        .candidates
        .first()
        .ok_or_else(|| GeminiError::new(GeminiErrorKind::EmptyResponse))?;

    let text = candidate
        .content
        .as_ref()
        .map(|content| {
            content
                .parts
                .iter()
                .map(|part| part.text.as_str())
                .collect::<Vec<_>>()
                .join("\n")
        })
        .unwrap_or_default();

    if text.is_empty() {
        return Err(GeminiError::new(GeminiErrorKind::EmptyResponse));
    }

    GenerateResponse::builder()
        .outputs(vec![Output::Text(text)])
        .build()
        .map_err(|e| {
            GeminiError::new(GeminiErrorKind::ResponseParsing(format!(
                "Failed to build response: {}",
                e
            )))
        })
}
