//! Blocking client for the Generative Language `generateContent` API.

use super::{ChatMessage, ChatRole, TextGenerator};
use crate::core::config::GeneratorConfig;
use crate::errors::collaborator_error;
use anyhow::{Context, Result};
use log::{debug, info};
use reqwest::blocking::Client as HttpClient;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Gemini client
pub struct GeminiClient {
    config: GeneratorConfig,
    http: HttpClient,
}

impl GeminiClient {
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { config, http })
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        )
    }
}

impl TextGenerator for GeminiClient {
    fn generate(&self, messages: &[ChatMessage]) -> Result<String> {
        let url = self.url();
        let request = build_request(messages);
        info!("Requesting README from model '{}'", self.config.model);

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", self.config.api_key.as_str())
            .json(&request)
            .send()
            .map_err(|e| collaborator_error(format!("request to {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            let message = format!("model returned status {status}: {body}");
            return Err(collaborator_error(message).into());
        }

        let parsed: GenerateResponse = response
            .json()
            .map_err(|e| collaborator_error(format!("malformed response: {e}")))?;
        let text = response_text(parsed)?;
        debug!("Model returned {} chars", text.len());
        Ok(text)
    }
}

/// Request body for `generateContent`
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    pub contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

/// Response body of `generateContent`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Content,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// System messages become the system instruction, user messages the contents
pub fn build_request(messages: &[ChatMessage]) -> GenerateRequest {
    let parts_for = |role: ChatRole| -> Vec<Part> {
        messages
            .iter()
            .filter(|m| m.role == role)
            .map(|m| Part {
                text: m.content.clone(),
            })
            .collect()
    };

    let system_parts = parts_for(ChatRole::System);
    let system_instruction = if system_parts.is_empty() {
        None
    } else {
        Some(Content {
            role: None,
            parts: system_parts,
        })
    };

    GenerateRequest {
        system_instruction,
        contents: vec![Content {
            role: Some("user".to_string()),
            parts: parts_for(ChatRole::User),
        }],
    }
}

/// Text of the first candidate, its parts concatenated
pub fn response_text(response: GenerateResponse) -> Result<String> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| collaborator_error("response contained no candidates"))?;

    let text: String = candidate
        .content
        .parts
        .into_iter()
        .map(|part| part.text)
        .collect();

    if text.trim().is_empty() {
        let reason = candidate.finish_reason.unwrap_or_else(|| "unknown".to_string());
        return Err(collaborator_error(format!(
            "response contained no text (finish reason: {reason})"
        ))
        .into());
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ReadmeError;
    use crate::llm::build_messages;
    use serde_json::json;

    #[test]
    fn test_request_shape() {
        let request = build_request(&build_messages("payload text"));
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["systemInstruction"]["parts"].as_array().unwrap().len(), 4);
        assert!(value["systemInstruction"].get("role").is_none());
        assert_eq!(
            value["contents"],
            json!([{ "role": "user", "parts": [{ "text": "payload text" }] }])
        );
    }

    #[test]
    fn test_response_text_joins_parts() {
        let response: GenerateResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{ "text": "# Title\n" }, { "text": "Body" }]
                },
                "finishReason": "STOP"
            }]
        }))
        .unwrap();
        assert_eq!(response_text(response).unwrap(), "# Title\nBody");
    }

    #[test]
    fn test_response_without_candidates_fails() {
        let response: GenerateResponse = serde_json::from_value(json!({})).unwrap();
        let err = response_text(response).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ReadmeError>(),
            Some(ReadmeError::Collaborator(_))
        ));
    }

    #[test]
    fn test_blocked_response_reports_reason() {
        let response: GenerateResponse = serde_json::from_value(json!({
            "candidates": [{ "finishReason": "SAFETY" }]
        }))
        .unwrap();
        let err = response_text(response).unwrap_err();
        assert!(err.to_string().contains("SAFETY"));
    }

    #[test]
    fn test_url() {
        let config = GeneratorConfig::new("key", "gemini-2.0-flash")
            .with_endpoint("http://localhost:9/v1beta/");
        let client = GeminiClient::new(config).unwrap();
        assert_eq!(
            client.url(),
            "http://localhost:9/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }
}
