//! Conversation handle.
//!
//! Holds the model-side dialogue for one session and sequences calls to the
//! provider. Not `Clone`: each session owns exactly one.

use std::sync::Arc;
use std::time::Duration;

use fabula_types::llm::{CompletionRequest, LlmError, Message};

use crate::llm::box_provider::BoxLlmProvider;

/// Per-call generation parameters shared by every conversation.
#[derive(Debug, Clone)]
pub struct GenerationSettings {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: Option<f64>,
    /// Upper bound on one provider call.
    pub timeout: Duration,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model: "gemini-1.5-flash".to_string(),
            max_tokens: 2048,
            temperature: None,
            timeout: Duration::from_secs(60),
        }
    }
}

/// Stateful dialogue with the generation provider.
pub struct Conversation {
    provider: Arc<BoxLlmProvider>,
    settings: GenerationSettings,
    context: Vec<Message>,
}

impl Conversation {
    pub fn new(provider: Arc<BoxLlmProvider>, settings: GenerationSettings) -> Self {
        Self {
            provider,
            settings,
            context: Vec::new(),
        }
    }

    /// Send one user message and return the model's reply.
    ///
    /// The context only grows when the call succeeds with non-blank text; on
    /// any error (including timeout) it is left exactly as before.
    pub async fn send(&mut self, text: &str) -> Result<String, LlmError> {
        let mut messages = self.context.clone();
        messages.push(Message::user(text));

        let request = CompletionRequest {
            model: self.settings.model.clone(),
            messages,
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
        };

        let response = tokio::time::timeout(self.settings.timeout, self.provider.complete(&request))
            .await
            .map_err(|_| LlmError::Timeout(self.settings.timeout.as_secs()))??;

        if response.content.trim().is_empty() {
            return Err(LlmError::EmptyResponse(
                response
                    .finish_reason
                    .unwrap_or_else(|| "no finish reason".to_string()),
            ));
        }

        self.context = request.messages;
        self.context.push(Message::assistant(response.content.clone()));

        Ok(response.content)
    }

    /// Number of messages the provider has seen so far.
    pub fn len(&self) -> usize {
        self.context.len()
    }

    pub fn is_empty(&self) -> bool {
        self.context.is_empty()
    }
}
