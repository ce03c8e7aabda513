use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use quiz_core::prompt::quiz_prompt;

use super::{GeminiConfig, QuizSource};
use crate::error::{ConfigError, FetchError};

/// Client for the Gemini `generateContent` endpoint.
#[derive(Clone, Debug)]
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Build a client whose requests time out after `config.timeout`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Client` if the HTTP client cannot be built.
    pub fn new(config: GeminiConfig) -> Result<Self, ConfigError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    /// Build a client from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration is missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(GeminiConfig::from_env()?)
    }

    #[must_use]
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Send `prompt` as a single-turn request and return the first candidate's text.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if the request fails, the status is not a success, or
    /// the body has no generated text.
    pub async fn generate(&self, prompt: &str) -> Result<String, FetchError> {
        let payload = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        log::debug!("POST {} (model {})", self.config.endpoint(), self.config.model);
        let response = self
            .client
            .post(self.config.endpoint())
            .query(&[("key", self.config.api_key.as_str())])
            .json(&payload)
            .send()
            .await
            .map_err(redact_url)?;

        let status = response.status();
        let body = response.text().await.map_err(redact_url)?;
        if !status.is_success() {
            return Err(FetchError::Status { status, body });
        }

        extract_candidate_text(&body)
    }
}

#[async_trait]
impl QuizSource for GeminiClient {
    async fn fetch_quiz_text(&self, topics: &str) -> Result<String, FetchError> {
        self.generate(&quiz_prompt(topics)).await
    }
}

// The request URL carries the API key as a query parameter.
fn redact_url(err: reqwest::Error) -> FetchError {
    FetchError::Transport(err.without_url())
}

/// Pull `candidates[0].content.parts[0].text` out of a success body, trimmed.
fn extract_candidate_text(body: &str) -> Result<String, FetchError> {
    let parsed: GenerateResponse =
        serde_json::from_str(body).map_err(|e| FetchError::MalformedResponse(e.to_string()))?;

    let text = parsed
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| FetchError::MalformedResponse("response has no candidates".into()))?
        .content
        .and_then(|content| content.parts.into_iter().next())
        .and_then(|part| part.text)
        .ok_or_else(|| FetchError::MalformedResponse("candidate has no text part".into()))?;

    Ok(text.trim().to_string())
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}
