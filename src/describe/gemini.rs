use super::backend::{DescriptionBackend, DetailLevel, EventType};
use super::messages::{Content, GenerateRequest, GenerateResponse, GenerationConfig};
use super::prompt;
use crate::error::SessionError;
use anyhow::{Context, Result};
use tracing::{debug, info};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Description backend backed by the Gemini `generateContent` API
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    /// Create a client; fails if the credential is missing or empty.
    pub fn new(api_key: String, model: String) -> Result<Self, SessionError> {
        if api_key.trim().is_empty() {
            return Err(SessionError::Configuration(
                "Gemini API key is not set".to_string(),
            ));
        }

        info!("Gemini client created for model {}", model);

        Ok(Self {
            http: reqwest::Client::new(),
            api_key,
            model,
        })
    }
}

#[async_trait::async_trait]
impl DescriptionBackend for GeminiClient {
    async fn generate_description(
        &self,
        segment: &str,
        event_type: EventType,
        detail_level: DetailLevel,
    ) -> Result<String> {
        let request = GenerateRequest {
            system_instruction: Content::text(prompt::system_instruction(event_type)),
            contents: vec![Content::text(prompt::build_prompt(
                segment,
                event_type,
                detail_level,
            ))],
            generation_config: GenerationConfig {
                temperature: 0.3,
                max_output_tokens: 50,
            },
        };

        let url = format!(
            "{}/{}:generateContent?key={}",
            API_BASE, self.model, self.api_key
        );

        debug!(%event_type, %detail_level, "requesting description for {} chars", segment.len());

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .context("Failed to reach Gemini API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Gemini API request failed with status {}: {}", status, body);
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .context("Failed to parse Gemini response")?;

        if let Some(feedback) = &parsed.prompt_feedback {
            if let Some(reason) = &feedback.block_reason {
                anyhow::bail!("Gemini API blocked the request: {}", reason);
            }
        }

        let text = parsed
            .text()
            .context("No description text in Gemini response")?;

        Ok(text.trim().to_string())
    }

    fn name(&self) -> &str {
        "gemini"
    }
}
