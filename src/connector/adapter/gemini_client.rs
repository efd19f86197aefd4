use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::application::GenerativeClient;
use crate::domain::{DomainError, ModelRequest};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const MODELS_PATH: &str = "/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const API_KEY_HEADER: &str = "x-goog-api-key";
/// The upstream call has no intrinsic bound; cap it at the transport level.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// generateContent request payload.
#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "systemInstruction", skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(serde::Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

impl<'a> Content<'a> {
    fn text(text: &'a str) -> Self {
        Self {
            parts: vec![Part { text }],
        }
    }
}

#[derive(serde::Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(serde::Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'static str,
    #[serde(rename = "responseSchema")]
    response_schema: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

/// Minimal subset of the generateContent response we care about.
#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: String,
}

/// HTTP client for the Gemini generateContent API.
///
/// Implements [`GenerativeClient`] so the use cases stay decoupled from
/// transport and vendor details. Holds only immutable configuration; a single
/// instance is safe to share across concurrent independent requests.
///
/// Configuration is explicit, with no module-level singleton. The host
/// sources the credential (environment, flag, secret store) and passes it in,
/// or uses [`GeminiClient::from_env`]:
///
/// ```text
/// GEMINI_API_KEY=...            (fallback: API_KEY)
/// GEMINI_MODEL=gemini-2.5-flash
/// GEMINI_BASE_URL=https://generativelanguage.googleapis.com
/// ```
#[derive(Debug)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    /// Full endpoint URL (base + models path + model + :generateContent).
    url: String,
}

impl GeminiClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let base: String = base_url.into();
        let model: String = model.into();
        let url = format!(
            "{}{MODELS_PATH}/{model}:generateContent",
            base.trim_end_matches('/')
        );
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            url,
        }
    }

    /// Construct from environment variables. The credential is required;
    /// its absence is a [`DomainError::ConfigurationError`] so hosts fail at
    /// startup instead of on the first request.
    pub fn from_env() -> Result<Self, DomainError> {
        let key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("API_KEY"))
            .map_err(|_| {
                DomainError::configuration(
                    "GEMINI_API_KEY environment variable not set (API_KEY also accepted)",
                )
            })?;
        let model =
            std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let base = std::env::var("GEMINI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Ok(Self::new(key, model, base))
    }

    fn build_body<'a>(request: &'a ModelRequest) -> ApiRequest<'a> {
        ApiRequest {
            contents: vec![Content::text(request.prompt())],
            system_instruction: request.system_instruction().map(Content::text),
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: request.response_schema().to_value(),
                temperature: request.temperature(),
            },
        }
    }
}

#[async_trait]
impl GenerativeClient for GeminiClient {
    async fn generate(&self, request: &ModelRequest) -> Result<String, DomainError> {
        let body = Self::build_body(request);

        let response = self
            .client
            .post(&self.url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| DomainError::network(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            warn!("GeminiClient: API returned {status}: {detail}");
            return Err(DomainError::network(format!("API returned {status}")));
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| DomainError::parse(format!("failed to decode response envelope: {e}")))?;

        let candidate = api_response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::parse("response contained no candidates"))?;

        // A long payload may arrive split across parts.
        Ok(candidate
            .content
            .parts
            .into_iter()
            .map(|p| p.text)
            .collect::<String>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Schema;

    #[test]
    fn body_carries_prompt_schema_and_temperature() {
        let request = ModelRequest::new(
            "appraise example.com",
            Schema::object(vec![("estimatedValue", Schema::Number)], &["estimatedValue"]),
        )
        .with_system_instruction("You are an appraiser.")
        .with_temperature(0.2);

        let body = serde_json::to_value(GeminiClient::build_body(&request)).unwrap();
        assert_eq!(body["contents"][0]["parts"][0]["text"], "appraise example.com");
        assert_eq!(
            body["systemInstruction"]["parts"][0]["text"],
            "You are an appraiser."
        );
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(
            body["generationConfig"]["responseSchema"]["type"],
            "OBJECT"
        );
        // f32 widens to f64 on serialization; compare approximately.
        let temperature = body["generationConfig"]["temperature"].as_f64().unwrap();
        assert!((temperature - 0.2).abs() < 1e-6);
    }

    #[test]
    fn body_omits_absent_optionals() {
        let request = ModelRequest::new("anything", Schema::String);
        let body = serde_json::to_value(GeminiClient::build_body(&request)).unwrap();
        assert!(body.get("systemInstruction").is_none());
        assert!(body["generationConfig"].get("temperature").is_none());
    }

    #[test]
    fn endpoint_url_includes_model() {
        let client = GeminiClient::new("key", "gemini-2.5-flash", "https://example.test/");
        assert_eq!(
            client.url,
            "https://example.test/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn from_env_requires_a_credential() {
        std::env::remove_var("GEMINI_API_KEY");
        std::env::remove_var("API_KEY");
        let err = GeminiClient::from_env().unwrap_err();
        assert!(err.is_configuration_error());

        std::env::set_var("GEMINI_API_KEY", "test-key");
        assert!(GeminiClient::from_env().is_ok());
        std::env::remove_var("GEMINI_API_KEY");
    }
}
