//! LlmProvider trait definition.
//!
//! This is the one seam between the session store and the outside world.
//! Uses RPITIT for `complete`; see `BoxLlmProvider` for dynamic dispatch.

use fabula_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for generative model backends (Gemini, test doubles, ...).
///
/// A provider is stateless with respect to conversations: every request
/// carries the full dialogue. Conversation state lives in
/// [`crate::chat::conversation::Conversation`].
///
/// Implementations live in fabula-infra (e.g., `GeminiProvider`).
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "gemini").
    fn name(&self) -> &str;

    /// Model identifier requests default to.
    fn model(&self) -> &str;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
