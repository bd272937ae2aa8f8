//! HTTP client for the Google Generative Language API.
//!
//! The upstream service is treated as an opaque "send prompt text, receive
//! text" dependency. Proxy routing is configured on the reqwest client at
//! construction time; process-wide proxy environment variables are never
//! touched, so concurrent requests cannot race on global state.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::{GeminiConfig, ProxyConfig};
use crate::models::{NameRequest, NameResponse};
use crate::services::gemini::prompt::build_prompt;
use crate::services::gemini::response::parse_name_response;
use crate::services::name_service::{GenerateError, NameGenerator};

// Sampling parameters for generateContent.
const TEMPERATURE: f32 = 0.7;
const TOP_K: u32 = 40;
const TOP_P: f32 = 0.95;
const MAX_OUTPUT_TOKENS: u32 = 2048;

pub struct GeminiClient {
    http_client: Client,
    api_base: String,
    model: String,
    api_key: String,
    timeout_secs: u64,
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig, proxy: &ProxyConfig) -> Result<Self, anyhow::Error> {
        let mut builder = Client::builder().timeout(Duration::from_secs(config.timeout_secs));

        if config.use_proxy && proxy.enabled {
            builder = builder
                .proxy(reqwest::Proxy::http(&proxy.http_proxy)?)
                .proxy(reqwest::Proxy::https(&proxy.https_proxy)?);
            tracing::info!("Routing Generative Language API calls through proxy");
        }

        Ok(Self {
            http_client: builder.build()?,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
            timeout_secs: config.timeout_secs,
        })
    }

    /// Issue a generateContent call and return the raw text of the first
    /// candidate.
    async fn generate_text(&self, prompt: &str) -> Result<String, GenerateError> {
        let url = format!("{}/v1beta/models/{}:generateContent", self.api_base, self.model);

        let body = GenerateContentRequest {
            contents: vec![Content { parts: vec![TextPart { text: prompt }] }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                top_k: TOP_K,
                top_p: TOP_P,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GenerateError::Timeout(self.timeout_secs)
                } else {
                    GenerateError::Upstream(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(GenerateError::Upstream(format!("status {}: {}", status, detail)));
        }

        let payload: GenerateContentResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                GenerateError::Timeout(self.timeout_secs)
            } else {
                GenerateError::Upstream(format!("invalid response body: {}", e))
            }
        })?;

        let text = payload
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .map(|p| p.text)
            .filter(|t| !t.is_empty())
            .ok_or(GenerateError::NoCandidates)?;

        tracing::debug!("model returned {} bytes of text", text.len());
        Ok(text)
    }
}

#[async_trait]
impl NameGenerator for GeminiClient {
    async fn generate(&self, request: &NameRequest) -> Result<NameResponse, GenerateError> {
        let prompt = build_prompt(request);
        let raw = self.generate_text(&prompt).await?;
        let response = parse_name_response(&raw)?;
        tracing::info!("model produced {} name suggestions", response.suggestions.len());
        Ok(response)
    }
}

// ============================================================================
// Wire types for the generateContent endpoint
// ============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<TextPart<'a>>,
}

#[derive(Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_k: u32,
    top_p: f32,
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}
