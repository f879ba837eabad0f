//! In-memory provider that replays queued replies. Test-only.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use fabula_types::llm::{CompletionRequest, CompletionResponse, LlmError, Usage};

use super::provider::LlmProvider;

const FALLBACK_REPLY: &str = "A história continua.";

pub(crate) type RequestLog = Arc<Mutex<Vec<CompletionRequest>>>;

pub(crate) struct ScriptedProvider {
    replies: Mutex<VecDeque<Result<String, String>>>,
    requests: RequestLog,
    delay: Option<Duration>,
}

impl ScriptedProvider {
    /// Replies are served in order; once exhausted every call succeeds with
    /// a fixed continuation line.
    pub(crate) fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: Mutex::new(replies.into_iter().map(|r| Ok(r.into())).collect()),
            requests: Arc::new(Mutex::new(Vec::new())),
            delay: None,
        }
    }

    /// Queue a provider failure as the next reply.
    pub(crate) fn then_fail(self, message: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Err(message.to_string()));
        self
    }

    /// Sleep before answering every call.
    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub(crate) fn request_log(&self) -> RequestLog {
        Arc::clone(&self.requests)
    }
}

impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    fn model(&self) -> &str {
        "scripted-model"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.requests.lock().unwrap().push(request.clone());

        let next = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(FALLBACK_REPLY.to_string()));

        match next {
            Ok(content) => Ok(CompletionResponse {
                content,
                model: request.model.clone(),
                finish_reason: Some("STOP".to_string()),
                usage: Usage::default(),
            }),
            Err(message) => Err(LlmError::Provider { message }),
        }
    }
}
