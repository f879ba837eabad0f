//! GeminiProvider -- concrete [`LlmProvider`] implementation for Google Gemini.
//!
//! Sends non-streaming requests to `models/{model}:generateContent`. The
//! API key travels in the `x-goog-api-key` header rather than the query
//! string so it never shows up in request URLs or trace spans.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use fabula_core::llm::provider::LlmProvider;
use fabula_types::llm::{CompletionRequest, CompletionResponse, LlmError, MessageRole, Usage};

use super::types::{
    GeminiContent, GeminiErrorBody, GeminiPart, GeminiRequest, GeminiResponse, GenerationConfig,
};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Google Gemini provider.
///
/// The API key is stored as a [`SecretString`] and only exposed when
/// building request headers.
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider.
    ///
    /// `timeout` bounds each HTTP exchange end to end.
    pub fn new(api_key: SecretString, model: String, timeout: Duration) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::Provider {
                message: format!("failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model,
        })
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn url(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }

    /// Convert a generic [`CompletionRequest`] into a [`GeminiRequest`].
    fn to_gemini_request(request: &CompletionRequest) -> GeminiRequest {
        let contents = request
            .messages
            .iter()
            .map(|m| GeminiContent {
                role: Some(
                    match m.role {
                        MessageRole::User => "user",
                        MessageRole::Assistant => "model",
                    }
                    .to_string(),
                ),
                parts: vec![GeminiPart {
                    text: Some(m.content.clone()),
                }],
            })
            .collect();

        GeminiRequest {
            contents,
            generation_config: GenerationConfig {
                max_output_tokens: request.max_tokens,
                temperature: request.temperature,
            },
        }
    }

    fn error_for_status(status: reqwest::StatusCode, body: &str) -> LlmError {
        let detail = serde_json::from_str::<GeminiErrorBody>(body).ok();
        let message = detail
            .as_ref()
            .map(|d| d.error.message.clone())
            .unwrap_or_else(|| body.to_string());

        match status.as_u16() {
            401 | 403 => LlmError::AuthenticationFailed,
            400 if message.contains("API key") => LlmError::AuthenticationFailed,
            400 => LlmError::InvalidRequest(message),
            429 => LlmError::RateLimited {
                retry_after_ms: None,
            },
            _ => LlmError::Provider {
                message: format!("HTTP {status}: {message}"),
            },
        }
    }
}

impl LlmProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let model = if request.model.is_empty() {
            self.model.as_str()
        } else {
            request.model.as_str()
        };
        let body = Self::to_gemini_request(request);

        let response = self
            .client
            .post(self.url(model))
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LlmError::Provider {
                        message: "request to Gemini timed out".to_string(),
                    }
                } else {
                    LlmError::Provider {
                        message: format!("HTTP request failed: {e}"),
                    }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(Self::error_for_status(status, &error_body));
        }

        let gemini_resp: GeminiResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Deserialization(format!("failed to parse response: {e}")))?;

        let content = gemini_resp
            .first_text()
            .ok_or_else(|| LlmError::EmptyResponse(gemini_resp.empty_reason()))?;

        let usage = gemini_resp
            .usage_metadata
            .as_ref()
            .map(|u| Usage {
                input_tokens: u.prompt_token_count,
                output_tokens: u.candidates_token_count,
            })
            .unwrap_or_default();

        tracing::debug!(
            model,
            input_tokens = usage.input_tokens,
            output_tokens = usage.output_tokens,
            "gemini completion"
        );

        Ok(CompletionResponse {
            content,
            model: gemini_resp
                .model_version
                .clone()
                .unwrap_or_else(|| model.to_string()),
            finish_reason: gemini_resp
                .candidates
                .first()
                .and_then(|c| c.finish_reason.clone()),
            usage,
        })
    }
}
