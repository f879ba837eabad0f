//! Interactive narrative chat sessions.
//!
//! [`SessionStore`] is the entry point; [`Conversation`] is the per-session
//! handle onto the generation provider.

pub mod conversation;
pub mod prompt;
pub mod session_id;
pub mod store;

pub use conversation::{Conversation, GenerationSettings};
pub use prompt::NarratorPrompt;
pub use store::{SessionStore, StartedSession};
