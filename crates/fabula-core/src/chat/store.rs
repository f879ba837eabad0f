//! In-memory chat session store.
//!
//! Owns every live session and mediates all calls to the generation provider.
//! The map is a `DashMap` of `Arc`-shared sessions: entries are cloned out
//! before any await, so no map guard is ever held across a provider call.
//!
//! Each session splits its state in two:
//! - the [`Conversation`] behind an async mutex, held for the whole provider
//!   call so concurrent sends to one session are serialised;
//! - the inspectable history behind a short-lived sync mutex, so listing and
//!   history reads never wait on generation.

use std::sync::{Arc, Mutex};

use dashmap::DashMap;

use fabula_types::chat::{preview_of, ChatTurn, SessionSummary};
use fabula_types::error::SessionError;

use super::conversation::{Conversation, GenerationSettings};
use super::prompt::NarratorPrompt;
use super::session_id::SessionIdGenerator;
use crate::llm::box_provider::BoxLlmProvider;

struct ChatSession {
    conversation: tokio::sync::Mutex<Conversation>,
    history: Mutex<Vec<ChatTurn>>,
}

impl ChatSession {
    fn history(&self) -> Vec<ChatTurn> {
        self.history
            .lock()
            .expect("session history lock poisoned")
            .clone()
    }
}

/// Result of opening a session.
#[derive(Debug, Clone)]
pub struct StartedSession {
    pub session_id: String,
    pub message: String,
}

/// Mapping from session id to conversation state.
pub struct SessionStore {
    provider: Arc<BoxLlmProvider>,
    prompt: NarratorPrompt,
    settings: GenerationSettings,
    sessions: DashMap<String, Arc<ChatSession>>,
    ids: SessionIdGenerator,
}

impl SessionStore {
    pub fn new(
        provider: Arc<BoxLlmProvider>,
        prompt: NarratorPrompt,
        settings: GenerationSettings,
    ) -> Self {
        Self {
            provider,
            prompt,
            settings,
            sessions: DashMap::new(),
            ids: SessionIdGenerator::new(),
        }
    }

    /// Open a new session and return the narrator's opening.
    ///
    /// The rendered narrator prompt is the first user turn. Nothing is stored
    /// if the provider fails.
    pub async fn start(&self, initial_context: Option<&str>) -> Result<StartedSession, SessionError> {
        let instruction = self.prompt.render(initial_context);

        let mut conversation = Conversation::new(Arc::clone(&self.provider), self.settings.clone());
        let reply = conversation.send(&instruction).await.inspect_err(|e| {
            tracing::warn!(provider = self.provider.name(), error = %e, "session start failed");
        })?;

        let session_id = self.ids.next_id();
        let session = ChatSession {
            conversation: tokio::sync::Mutex::new(conversation),
            history: Mutex::new(vec![
                ChatTurn::user(instruction),
                ChatTurn::assistant(reply.clone()),
            ]),
        };
        self.sessions.insert(session_id.clone(), Arc::new(session));

        tracing::info!(session_id = %session_id, "chat session started");

        Ok(StartedSession {
            session_id,
            message: reply,
        })
    }

    /// Continue a session with a user message and return the reply.
    ///
    /// Both turns are appended only after the provider succeeds.
    pub async fn send(&self, session_id: &str, message: &str) -> Result<String, SessionError> {
        let session = self.lookup(session_id)?;

        if message.trim().is_empty() {
            return Err(SessionError::EmptyMessage);
        }

        let mut conversation = session.conversation.lock().await;
        let reply = conversation.send(message).await.inspect_err(|e| {
            tracing::warn!(session_id, error = %e, "generation failed");
        })?;

        let turns = {
            let mut history = session
                .history
                .lock()
                .expect("session history lock poisoned");
            history.push(ChatTurn::user(message));
            history.push(ChatTurn::assistant(reply.clone()));
            history.len()
        };

        tracing::debug!(session_id, turns, "message sent");
        Ok(reply)
    }

    /// Full history of a session, oldest first.
    pub fn history(&self, session_id: &str) -> Result<Vec<ChatTurn>, SessionError> {
        Ok(self.lookup(session_id)?.history())
    }

    /// Summaries of every live session, in creation order.
    pub fn list(&self) -> Vec<SessionSummary> {
        let mut live: Vec<(String, Arc<ChatSession>)> = self
            .sessions
            .iter()
            .map(|entry| (entry.key().clone(), Arc::clone(entry.value())))
            .collect();
        live.sort_by_key(|(id, _)| id.parse::<u64>().unwrap_or(u64::MAX));

        live.into_iter()
            .map(|(id, session)| {
                let history = session.history();
                SessionSummary {
                    preview: preview_of(&history),
                    message_count: history.len(),
                    last_activity: id.clone(),
                    session_id: id,
                }
            })
            .collect()
    }

    /// Remove a session. Deleting an unknown (or already deleted) id fails.
    pub fn delete(&self, session_id: &str) -> Result<(), SessionError> {
        self.sessions
            .remove(session_id)
            .ok_or(SessionError::NotFound)?;
        tracing::info!(session_id, "chat session deleted");
        Ok(())
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn lookup(&self, session_id: &str) -> Result<Arc<ChatSession>, SessionError> {
        self.sessions
            .get(session_id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or(SessionError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::scripted::ScriptedProvider;
    use fabula_types::chat::TurnRole;

    fn store(provider: ScriptedProvider) -> SessionStore {
        SessionStore::new(
            Arc::new(BoxLlmProvider::new(provider)),
            NarratorPrompt::default(),
            GenerationSettings::default(),
        )
    }

    #[tokio::test]
    async fn test_start_yields_two_turn_history() {
        let store = store(ScriptedProvider::new(["A névoa cobre a vila."]));

        let started = store.start(Some("uma vila costeira")).await.unwrap();
        assert_eq!(started.message, "A névoa cobre a vila.");

        let history = store.history(&started.session_id).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].role, TurnRole::User);
        assert!(history[0].content.contains("Contexto inicial: uma vila costeira"));
        assert_eq!(history[1], ChatTurn::assistant("A névoa cobre a vila."));
    }

    #[tokio::test]
    async fn test_start_failure_stores_nothing() {
        let store = store(ScriptedProvider::new(Vec::<String>::new()).then_fail("unreachable"));

        let err = store.start(None).await.unwrap_err();
        assert!(matches!(err, SessionError::Generation(_)));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_history_grows_by_two_per_send() {
        let store = store(ScriptedProvider::new(["Início."]));
        let id = store.start(None).await.unwrap().session_id;

        for n in 1..=5 {
            store.send(&id, &format!("ação {n}")).await.unwrap();
            assert_eq!(store.history(&id).unwrap().len(), 2 + 2 * n);
        }

        let history = store.history(&id).unwrap();
        assert_eq!(history[8], ChatTurn::user("ação 4"));
        assert_eq!(history[9].role, TurnRole::Assistant);
    }

    #[tokio::test]
    async fn test_send_to_unknown_session() {
        let store = store(ScriptedProvider::new(["Início."]));
        let err = store.send("123", "olá").await.unwrap_err();
        assert!(matches!(err, SessionError::NotFound));
    }

    #[tokio::test]
    async fn test_blank_message_rejected_without_mutation() {
        let provider = ScriptedProvider::new(["Início."]);
        let log = provider.request_log();
        let store = store(provider);
        let id = store.start(None).await.unwrap().session_id;

        for blank in ["", "   ", "\n\t"] {
            let err = store.send(&id, blank).await.unwrap_err();
            assert!(matches!(err, SessionError::EmptyMessage));
        }
        assert_eq!(store.history(&id).unwrap().len(), 2);
        assert_eq!(log.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_send_does_not_append() {
        let store = store(ScriptedProvider::new(["Início."]).then_fail("HTTP 500"));
        let id = store.start(None).await.unwrap().session_id;

        let err = store.send(&id, "avançar").await.unwrap_err();
        assert!(matches!(err, SessionError::Generation(_)));
        assert_eq!(store.history(&id).unwrap().len(), 2);

        // The session stays usable afterwards.
        store.send(&id, "avançar de novo").await.unwrap();
        assert_eq!(store.history(&id).unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_delete_then_history_not_found() {
        let store = store(ScriptedProvider::new(["Início."]));
        let id = store.start(None).await.unwrap().session_id;

        store.delete(&id).unwrap();
        assert!(matches!(store.history(&id), Err(SessionError::NotFound)));
        assert!(matches!(store.delete(&id), Err(SessionError::NotFound)));
    }

    #[tokio::test]
    async fn test_list_summaries_in_creation_order() {
        let long_opening = "Era uma vez ".repeat(20);
        let store = store(ScriptedProvider::new([long_opening.as_str(), "Curta."]));

        let first = store.start(None).await.unwrap().session_id;
        let second = store.start(None).await.unwrap().session_id;
        store.send(&second, "continuar").await.unwrap();

        let sessions = store.list();
        assert_eq!(sessions.len(), 2);

        assert_eq!(sessions[0].session_id, first);
        assert_eq!(sessions[0].last_activity, first);
        assert_eq!(sessions[0].message_count, 2);
        assert!(sessions[0].preview.ends_with("..."));
        assert_eq!(sessions[0].preview.chars().count(), 103);

        assert_eq!(sessions[1].session_id, second);
        assert_eq!(sessions[1].preview, "Curta.");
        assert_eq!(sessions[1].message_count, 4);
    }

    #[tokio::test]
    async fn test_concurrent_sends_serialise_per_session() {
        let store = Arc::new(store(ScriptedProvider::new(["Início."])));
        let id = store.start(None).await.unwrap().session_id;

        let tasks: Vec<_> = (0..10)
            .map(|n| {
                let store = Arc::clone(&store);
                let id = id.clone();
                tokio::spawn(async move { store.send(&id, &format!("ação {n}")).await })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let history = store.history(&id).unwrap();
        assert_eq!(history.len(), 22);
        for pair in history[2..].chunks(2) {
            assert_eq!(pair[0].role, TurnRole::User);
            assert_eq!(pair[1].role, TurnRole::Assistant);
        }
    }
}
