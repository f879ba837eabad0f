//! Business logic for Fabula.
//!
//! Owns the two resource managers behind the HTTP layer -- the chat
//! [`chat::SessionStore`] and the [`story::StoryCatalog`] -- plus the
//! [`llm::provider::LlmProvider`] port that infrastructure implements.
//! Depends only on `fabula-types`; never on `fabula-infra` or any HTTP crate.

pub mod chat;
pub mod llm;
pub mod story;
