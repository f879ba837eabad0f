//! LLM provider implementations.
//!
//! Contains the concrete Gemini implementation of the [`LlmProvider`] trait
//! defined in `fabula-core`, and a factory ([`create_provider`]) that builds
//! it from the application config.
//!
//! [`LlmProvider`]: fabula_core::llm::provider::LlmProvider

pub mod gemini;

use std::time::Duration;

use secrecy::SecretString;

use fabula_core::llm::box_provider::BoxLlmProvider;
use fabula_types::config::AppConfig;
use fabula_types::llm::LlmError;

use self::gemini::GeminiProvider;

/// Build the generation provider for the configured model.
pub fn create_provider(config: &AppConfig, api_key: SecretString) -> Result<BoxLlmProvider, LlmError> {
    let provider = GeminiProvider::new(
        api_key,
        config.model.clone(),
        Duration::from_secs(config.generation_timeout_secs),
    )?;
    Ok(BoxLlmProvider::new(provider))
}
