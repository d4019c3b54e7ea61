//! Generative text model client
//!
//! Calls the Gemini `generateContent` REST endpoint. The public `generate`
//! method never fails: every transport, quota, or payload problem is
//! downgraded to a placeholder string carrying the failure reason, so
//! downstream consumers always receive usable text. Calls are single-shot
//! with a hard timeout; retry policy belongs to the caller's infrastructure.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::GenAiConfig;
use crate::services::sanitize_markdown;

const GENERATION_TIMEOUT_SECS: u64 = 30;

/// Why a generation attempt failed. Never leaves this module as an error;
/// the reason is embedded in the degraded placeholder text instead.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("GOOGLE_GENAI_API_KEY not configured")]
    MissingCredential,

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Client for the external generative text model
#[derive(Clone)]
pub struct GenAiClient {
    http_client: Client,
    api_endpoint: String,
    api_key: Option<String>,
    model: String,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GenAiClient {
    /// Create a client from configuration
    pub fn new(config: &GenAiConfig) -> Self {
        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(GENERATION_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http_client,
            api_endpoint: config.api_endpoint.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        }
    }

    /// Whether a credential is configured
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Generate sanitized text for a prompt. Never fails: on any error the
    /// returned string explains that the service is temporarily unavailable.
    pub async fn generate(&self, prompt: &str) -> String {
        match self.try_generate(prompt).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("generation failed: {}", e);
                format!("AI service temporarily unavailable. Error: {}", e)
            }
        }
    }

    async fn try_generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(GenerationError::MissingCredential)?;

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.api_endpoint, self.model, api_key
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self.http_client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Api { status, body });
        }

        let data: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::MalformedResponse(e.to_string()))?;

        let text = data
            .candidates
            .first()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .iter()
                    .map(|part| part.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        Ok(sanitize_markdown(text.trim()))
    }
}
