//! Application state wiring the stores together.
//!
//! Both stores are built once at startup and shared with every handler
//! through axum `State`. They share nothing with each other.

use std::sync::Arc;
use std::time::Duration;

use secrecy::SecretString;

use fabula_core::chat::{GenerationSettings, NarratorPrompt, SessionStore};
use fabula_core::llm::box_provider::BoxLlmProvider;
use fabula_core::story::StoryCatalog;
use fabula_infra::llm::create_provider;
use fabula_types::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionStore>,
    pub stories: Arc<StoryCatalog>,
}

impl AppState {
    /// Wire the Gemini provider and the seeded catalog from configuration.
    pub fn init(config: &AppConfig, api_key: SecretString) -> anyhow::Result<Self> {
        let provider = create_provider(config, api_key)?;
        tracing::info!(
            provider = provider.name(),
            model = provider.model(),
            "generation provider ready"
        );
        Self::with_provider(config, provider)
    }

    /// Build state around an already-constructed provider.
    pub fn with_provider(config: &AppConfig, provider: BoxLlmProvider) -> anyhow::Result<Self> {
        let prompt = NarratorPrompt::new(config.narrator_prompt.clone())?;
        let settings = GenerationSettings {
            model: config.model.clone(),
            max_tokens: config.max_output_tokens,
            temperature: config.temperature,
            timeout: Duration::from_secs(config.generation_timeout_secs),
        };

        Ok(Self {
            sessions: Arc::new(SessionStore::new(Arc::new(provider), prompt, settings)),
            stories: Arc::new(StoryCatalog::seeded()),
        })
    }
}
