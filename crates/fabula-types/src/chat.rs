//! Chat session types.
//!
//! A session's history is a flat list of role-tagged turns mirroring what was
//! exchanged with the model. These are the shapes returned by the chat API.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum number of characters kept in a session preview.
pub const PREVIEW_MAX_CHARS: usize = 100;

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Assistant,
}

impl fmt::Display for TurnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnRole::User => write!(f, "user"),
            TurnRole::Assistant => write!(f, "assistant"),
        }
    }
}

impl FromStr for TurnRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(TurnRole::User),
            "assistant" => Ok(TurnRole::Assistant),
            other => Err(format!("invalid turn role: '{other}'")),
        }
    }
}

/// One message within a session's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: TurnRole,
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Assistant,
            content: content.into(),
        }
    }
}

/// Listing entry for a live session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub session_id: String,
    /// First assistant reply, truncated to [`PREVIEW_MAX_CHARS`].
    pub preview: String,
    /// Number of turns in the history (user and assistant).
    pub message_count: usize,
    /// Placeholder: currently the session id itself.
    pub last_activity: String,
}

/// Build the listing preview for a history.
///
/// Uses the turn at index 1 (the opening narration). Histories shorter than
/// two turns produce an empty preview. Longer content is cut at
/// [`PREVIEW_MAX_CHARS`] characters and suffixed with `...`.
pub fn preview_of(history: &[ChatTurn]) -> String {
    let Some(turn) = history.get(1) else {
        return String::new();
    };

    if turn.content.chars().count() > PREVIEW_MAX_CHARS {
        let cut: String = turn.content.chars().take(PREVIEW_MAX_CHARS).collect();
        format!("{cut}...")
    } else {
        turn.content.clone()
    }
}
